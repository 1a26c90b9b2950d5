#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::core::desk::{Paper, Point, Size, StackOrder};
    use crate::core::disclosure::{DisclosureGroup, Layout};
    use crate::core::navigation::{NavAction, PROJECT_GROUP, PageNavigator};
    use crate::core::sequence::{MutePreference, Step, TransitionSequence};
    use crate::core::site::{ATHENA_TARGET, DESK_PAPERS, PROJECTS, PageFeatures, SKILL_PANELS};
    use crate::core::spotlight::{SpotlightSelection, playbook_for};

    const DESK: Size = Size {
        width: 1024.0,
        height: 768.0,
    };
    const PAPER: Size = Size {
        width: 180.0,
        height: 240.0,
    };

    fn desk_papers() -> Vec<Paper> {
        DESK_PAPERS
            .iter()
            .map(|(_, link, _, _)| Paper::new(link.map(str::to_string)))
            .collect()
    }

    #[test]
    fn test_click_on_desk_paper_opens_project_once() {
        let mut stack = StackOrder::new();
        let mut papers = desk_papers();
        let paper = &mut papers[0];

        paper.pointer_down(&mut stack, 1, Point::new(300.0, 300.0), Point::new(120.0, 140.0));
        paper.pointer_move(Point::new(302.0, 303.0), PAPER, DESK);
        let first = paper.pointer_up().map(str::to_string);
        let second = paper.pointer_up().map(str::to_string);

        assert_eq!(first.as_deref(), Some("/projects/junipers-clompass.html"));
        assert_eq!(second, None);
    }

    #[test]
    fn test_dragging_a_paper_does_not_navigate() {
        let mut stack = StackOrder::new();
        let mut papers = desk_papers();
        let paper = &mut papers[1];

        paper.pointer_down(&mut stack, 7, Point::new(400.0, 200.0), Point::new(350.0, 100.0));
        let moved = paper
            .pointer_move(Point::new(480.0, 260.0), PAPER, DESK)
            .expect("pressed paper should move");

        assert_eq!(moved, Point::new(430.0, 160.0));
        assert_eq!(paper.pointer_up(), None);
    }

    #[test]
    fn test_last_touched_paper_is_on_top() {
        let mut stack = StackOrder::new();
        let mut papers = desk_papers();

        let mut z = Vec::new();
        for (i, paper) in papers.iter_mut().enumerate() {
            z.push(paper.pointer_down(&mut stack, i as i32, Point::default(), Point::default()));
            paper.pointer_cancel();
        }
        let again = papers[0].pointer_down(&mut stack, 99, Point::default(), Point::default());

        assert!(z.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(again > *z.last().unwrap());
    }

    #[test]
    fn test_wide_skill_cards_keep_exactly_one_open() {
        let mut group = DisclosureGroup::new(SKILL_PANELS.len(), Layout::Wide);

        for index in [1, 2, 2, 0, 1] {
            group.activate(index);
            let open = (0..group.len()).filter(|&i| group.is_open(i)).count();
            assert_eq!(open, 1);
        }
        assert_eq!(group.open_index(), Some(1));
    }

    #[test]
    fn test_skip_cancels_cues_and_navigates_once() {
        let mut seq = TransitionSequence::new();
        let mute = MutePreference::default();

        let mut played = Vec::new();
        let mut navigations = 0;
        let run = |steps: Vec<Step>, played: &mut Vec<Step>, navigations: &mut u32| {
            for step in steps.into_iter().filter(|step| mute.allows(*step)) {
                match step {
                    Step::Navigate => *navigations += 1,
                    other => played.push(other),
                }
            }
        };

        run(seq.arm(), &mut played, &mut navigations);
        for _ in 0..3 {
            run(seq.skip().into_iter().collect(), &mut played, &mut navigations);
        }
        for elapsed in [500, 1000, 1700, 3500, 5000] {
            run(seq.advance(Duration::from_millis(elapsed)), &mut played, &mut navigations);
        }

        assert_eq!(played, vec![Step::Overlay]);
        assert_eq!(navigations, 1);
    }

    #[test]
    fn test_muted_sequence_still_reaches_target() {
        let mut seq = TransitionSequence::new();
        let mute = MutePreference::from_stored(Some("true"));

        let mut steps = seq.arm();
        steps.extend(seq.advance(Duration::from_secs(4)));
        let allowed: Vec<_> = steps.into_iter().filter(|step| mute.allows(*step)).collect();

        assert_eq!(allowed, vec![Step::Overlay, Step::Navigate]);
        assert!(ATHENA_TARGET.starts_with(PROJECT_GROUP.base));
    }

    #[test]
    fn test_swipe_from_first_project() {
        let first = PageNavigator::new(PROJECT_GROUP, &PROJECT_GROUP.href(PROJECTS[0].slug));

        let long = NavAction::from_swipe(300.0, 240.0).and_then(|action| first.target(action));
        let short = NavAction::from_swipe(300.0, 270.0).and_then(|action| first.target(action));

        assert_eq!(long.as_deref(), Some("/projects/responsible-ai.html"));
        assert_eq!(short, None);
    }

    #[test]
    fn test_walk_the_whole_project_group() {
        let mut path = PROJECT_GROUP.href(PROJECTS[0].slug);
        let mut visited = vec![path.clone()];

        while let Some(next) = PageNavigator::new(PROJECT_GROUP, &path).target(NavAction::Next) {
            visited.push(next.clone());
            path = next;
        }

        assert_eq!(visited.len(), PROJECTS.len());
        assert_eq!(
            PageNavigator::new(PROJECT_GROUP, &path).target(NavAction::from_key("Escape").unwrap()),
            Some("/".to_string())
        );
    }

    #[test]
    fn test_every_project_page_has_navigation() {
        for project in PROJECTS {
            let features = PageFeatures::project(project);
            assert_eq!(features.navigation, Some(PROJECT_GROUP));
            assert!(!features.desk);
        }
        assert!(PageFeatures::LANDING.navigation.is_none());
    }

    #[test]
    fn test_spotlight_playbook_follows_selection() {
        let mut selection = SpotlightSelection::default();
        assert_eq!(
            playbook_for(selection.active().subtitle)[0].heading,
            "Show measurable trust & safety wins"
        );

        selection.select("collaborators");
        assert_eq!(
            playbook_for(selection.active().subtitle)[1].heading,
            "Document community care"
        );
    }
}
