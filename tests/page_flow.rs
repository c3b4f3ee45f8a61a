use std::time::Duration;

use page_flip::settings::{FlowSettings, PageBound};
use page_flip::{Book, InputEvent, Manifest, PageFlowController, Settings};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Tick every millisecond from `from` to `to` inclusive, collecting applied delayed pages.
fn run(flow: &mut PageFlowController, from: u64, to: u64) -> Vec<(u64, i32)> {
    (from..=to)
        .filter_map(|t| flow.tick(ms(t)).map(|page| (t, page)))
        .collect()
}

#[test]
fn jump_commits_only_last_target() {
    let mut flow = PageFlowController::new(8, &FlowSettings::default());
    flow.go_to(2, ms(0));
    run(&mut flow, 0, 1000);
    assert_eq!(flow.delayed_page(), 2);

    flow.go_to(3, ms(1000));
    flow.go_to(4, ms(1010));
    flow.go_to(5, ms(1020));

    let applied = run(&mut flow, 1000, 2000);
    assert_eq!(applied, vec![(1320, 5)]);
}

#[test]
fn rapid_next_clicks_commit_final_page() {
    let mut flow = PageFlowController::new(8, &FlowSettings::default());
    flow.go_to(4, ms(0));
    run(&mut flow, 0, 1000);

    let mut applied = Vec::new();
    for (i, t) in [1000u64, 1040, 1080].into_iter().enumerate() {
        applied.extend(run(&mut flow, t - 39, t - 1));
        flow.next(ms(t));
        assert_eq!(flow.current_page(), 5 + i as i32);
    }
    applied.extend(run(&mut flow, 1080, 2000));

    assert_eq!(applied, vec![(1380, 7)]);
}

#[test]
fn opening_from_closed_waits_longer() {
    let mut flow = PageFlowController::new(8, &FlowSettings::default());
    flow.next(ms(0));
    assert_eq!(run(&mut flow, 0, 1000), vec![(800, 1)]);

    flow.next(ms(1000));
    assert_eq!(run(&mut flow, 1000, 2000), vec![(1300, 2)]);
}

#[test]
fn before_cover_convention_opens_to_cover_slowly() {
    let settings = FlowSettings {
        lower_bound: PageBound::BeforeCover,
        ..FlowSettings::default()
    };
    let mut flow = PageFlowController::new(8, &settings);
    assert_eq!(flow.current_page(), -1);
    flow.go_to(0, ms(0));
    assert_eq!(run(&mut flow, 0, 1000), vec![(800, 0)]);
}

#[test]
fn auto_advance_wraps_after_pause() {
    let mut flow = PageFlowController::new(4, &FlowSettings::default());
    flow.go_to(4, ms(0));
    flow.set_auto_advance(true, ms(0));
    run(&mut flow, 0, 1999);
    // first step comes after the start delay
    flow.tick(ms(2000));
    assert_eq!(flow.current_page(), 0);

    // manual jump to the back cover re-arms with the wrap pause
    flow.go_to(4, ms(3000));
    run(&mut flow, 3000, 5999);
    assert_eq!(flow.current_page(), 4);
    run(&mut flow, 6000, 6000);
    assert_eq!(flow.current_page(), 0);
}

#[test]
fn page_requests_never_leave_range() {
    for bound in [PageBound::Cover, PageBound::BeforeCover] {
        let settings = FlowSettings {
            lower_bound: bound,
            ..FlowSettings::default()
        };
        let mut flow = PageFlowController::new(6, &settings);
        for n in -50i64..=50 {
            let page = flow.go_to(n, ms(0));
            let expected = n.clamp(bound.lower() as i64, 6) as i32;
            assert_eq!(page, expected);
            assert!(page >= flow.lower_bound() && page <= flow.upper_bound());
        }
    }
}

#[test]
fn closed_book_pose_after_returning_to_cover() {
    let mut settings = Settings::default();
    settings.flow.auto_advance = false;
    let mut book = Book::new(&Manifest::default(), &settings);
    book.start(ms(0));

    book.handle_input(InputEvent::PageIndex(3), ms(0));
    let mut t = 0;
    while t < 3000 {
        t += 16;
        book.update(ms(t), 0.016);
    }
    assert!(book.page(0).unwrap().state.opened);
    assert!(book.page(0).unwrap().skeleton.bones()[0].turn < 0.0);

    book.handle_input(InputEvent::PageIndex(0), ms(t));
    let end = t + 10_000;
    while t < end {
        t += 16;
        book.update(ms(t), 0.016);
    }

    for page in book.pages() {
        assert!(page.state.book_closed);
        assert!(!page.state.opened);
        let bones = page.skeleton.bones();
        assert!((bones[0].turn - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
        assert!(bones[1..].iter().all(|b| b.turn == 0.0 && b.fold == 0.0));
    }
}
