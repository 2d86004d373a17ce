mod common;

use common::fixtures::{registry_with_optional_section, tutorial_page, tutorial_registry};
use common::{TestResult, active_entry_count, id, init_logging, mount_default, record_changes};
use sectionnav::{DocumentHost, IntersectionEntry, ObserverStatus};

#[test]
fn test_section_entering_band_becomes_active() -> TestResult {
    init_logging();
    let doc = tutorial_page();
    let session = mount_default(&doc, tutorial_registry());

    doc.flush();
    assert_eq!(session.active(), Some(id("intro")));

    // setup's heading at viewport row 100, inside the 80..300 band
    doc.user_scroll_to(1100.0);
    assert_eq!(session.active(), Some(id("setup")));

    doc.user_scroll_to(2300.0);
    assert_eq!(session.active(), Some(id("done")));
    Ok(())
}

#[test]
fn test_section_above_band_does_not_activate() -> TestResult {
    let doc = tutorial_page();
    let session = mount_default(&doc, tutorial_registry());

    // setup's heading at viewport row 30, under the header and above the band
    doc.user_scroll_to(1170.0);
    assert_eq!(session.active(), None);
    Ok(())
}

#[test]
fn test_leaving_band_keeps_last_active_section() -> TestResult {
    let doc = tutorial_page();
    let session = mount_default(&doc, tutorial_registry());

    doc.user_scroll_to(1100.0);
    assert_eq!(session.active(), Some(id("setup")));

    // Nothing in the band between setup and done
    doc.user_scroll_to(1700.0);
    assert_eq!(session.active(), Some(id("setup")));
    Ok(())
}

#[test]
fn test_scrolling_back_up_reactivates_earlier_section() -> TestResult {
    let doc = tutorial_page();
    let session = mount_default(&doc, tutorial_registry());

    doc.user_scroll_to(2300.0);
    doc.user_scroll_to(1100.0);
    assert_eq!(session.active(), Some(id("setup")));
    doc.user_scroll_to(0.0);
    assert_eq!(session.active(), Some(id("intro")));
    Ok(())
}

#[test]
fn test_batch_entries_apply_in_event_order() -> TestResult {
    let doc = tutorial_page();
    let session = mount_default(&doc, tutorial_registry());

    doc.fire(&[
        IntersectionEntry::entered("intro"),
        IntersectionEntry::entered("setup"),
        IntersectionEntry::left("intro"),
    ]);
    assert_eq!(session.active(), Some(id("setup")));

    doc.fire(&[
        IntersectionEntry::entered("done"),
        IntersectionEntry::entered("intro"),
    ]);
    assert_eq!(session.active(), Some(id("intro")));
    Ok(())
}

#[test]
fn test_at_most_one_entry_is_active() -> TestResult {
    let doc = tutorial_page();
    let session = mount_default(&doc, tutorial_registry());
    assert_eq!(active_entry_count(&session), 0);

    for top in [0.0, 600.0, 1100.0, 1170.0, 2300.0, 1100.0, 0.0] {
        doc.user_scroll_to(top);
        assert!(active_entry_count(&session) <= 1, "scroll_top {}", top);
    }
    session.navigate_to("done");
    assert_eq!(active_entry_count(&session), 1);
    Ok(())
}

#[test]
fn test_missing_anchor_is_skipped_but_listed_in_toc() -> TestResult {
    init_logging();
    let doc = tutorial_page();
    let session = mount_default(&doc, registry_with_optional_section());

    assert_eq!(session.observer_status(), &ObserverStatus::Observing { targets: 3 });
    let observed: Vec<String> = doc.observed_targets().iter().map(|t| t.to_string()).collect();
    assert_eq!(observed, vec!["intro", "setup", "done"]);

    let toc: Vec<String> = session
        .toc_entries()
        .iter()
        .map(|e| e.target_id.to_string())
        .collect();
    assert_eq!(toc, vec!["intro", "setup", "troubleshooting", "done"]);

    assert_eq!(session.navigate_to("troubleshooting"), None);
    Ok(())
}

#[test]
fn test_listeners_see_each_change_once() -> TestResult {
    let doc = tutorial_page();
    let session = mount_default(&doc, tutorial_registry());
    let seen = record_changes(&session);

    doc.flush();
    doc.user_scroll_to(1100.0);
    doc.user_scroll_to(1150.0);
    doc.user_scroll_to(2300.0);

    assert_eq!(
        *seen.borrow(),
        vec![
            Some("intro".to_string()),
            Some("setup".to_string()),
            Some("done".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn test_unsupported_observation_degrades_to_no_highlight() -> TestResult {
    init_logging();
    let doc = tutorial_page().without_observation();
    let session = mount_default(&doc, tutorial_registry());

    assert_eq!(session.observer_status(), &ObserverStatus::Unsupported);
    doc.user_scroll_to(1100.0);
    assert_eq!(session.active(), None);

    // Click navigation still works.
    assert_eq!(session.navigate_to("setup"), Some(1120.0));
    doc.settle();
    assert_eq!(doc.scroll_top(), 1120.0);
    Ok(())
}

#[test]
fn test_pages_do_not_share_state() -> TestResult {
    let first_doc = tutorial_page();
    let second_doc = tutorial_page();
    let first = mount_default(&first_doc, tutorial_registry());
    let second = mount_default(&second_doc, tutorial_registry());

    first_doc.user_scroll_to(1100.0);
    second_doc.user_scroll_to(2300.0);

    assert_eq!(first.active(), Some(id("setup")));
    assert_eq!(second.active(), Some(id("done")));
    Ok(())
}
