use folio_fx::chrome::clock::format_clock;
use folio_fx::chrome::preloader::LoadTracker;
use folio_fx::chrome::{
    is_active_link, slider_position, trap_focus, video_embed_url, Overlay, ViewFlag,
};

#[test]
fn overlay_toggles_and_locks_scroll() {
    let menu = Overlay::default();
    assert!(!menu.is_open());
    assert_eq!(menu.body_overflow(), "");
    let menu = menu.toggled();
    assert!(menu.is_open());
    assert_eq!(menu.body_overflow(), "hidden");
    assert_eq!(menu.toggled(), Overlay::Closed);
}

#[test]
fn view_flag_follows_intersection() {
    assert_eq!(ViewFlag::default(), ViewFlag::OutOfView);
    assert!(ViewFlag::from_intersecting(true).is_in_view());
    assert!(!ViewFlag::from_intersecting(false).is_in_view());
}

#[test]
fn focus_trap_wraps_both_ways() {
    assert_eq!(trap_focus(None, 0, false), None);
    assert_eq!(trap_focus(None, 3, false), Some(0));
    assert_eq!(trap_focus(None, 3, true), Some(2));
    assert_eq!(trap_focus(Some(0), 3, false), Some(1));
    assert_eq!(trap_focus(Some(2), 3, false), Some(0));
    assert_eq!(trap_focus(Some(0), 3, true), Some(2));
    assert_eq!(trap_focus(Some(1), 3, true), Some(0));
}

#[test]
fn active_link_matching() {
    assert!(is_active_link("/work.html", "work.html"));
    assert!(is_active_link("/site/about.html", "about.html"));
    assert!(is_active_link("/", "index.html"));
    assert!(!is_active_link("/work.html", "about.html"));
    assert!(!is_active_link("/work.html", ""));
}

#[test]
fn video_url_autoplays_without_related() {
    assert_eq!(
        video_embed_url("dQw4w9WgXcQ"),
        "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0"
    );
}

#[test]
fn slider_clips_before_image() {
    let pos = slider_position(30.0);
    assert_eq!(pos.clip_path, "inset(0 70% 0 0)");
    assert_eq!(pos.line_left, "30%");
    assert_eq!(slider_position(140.0).line_left, "100%");
    assert_eq!(slider_position(-5.0).clip_path, "inset(0 100% 0 0)");
}

#[test]
fn preloader_counts_to_complete() {
    let mut tracker = LoadTracker::new(3);
    assert_eq!(tracker.percent(), 0);
    assert_eq!(tracker.settle_one(), 33);
    assert_eq!(tracker.settle_one(), 67);
    assert!(!tracker.is_complete());
    assert_eq!(tracker.settle_one(), 100);
    assert!(tracker.is_complete());
    assert_eq!(tracker.settle_one(), 100);
    assert_eq!(tracker.bar_width_css(), "100%");
}

#[test]
fn preloader_without_media_is_done() {
    let tracker = LoadTracker::new(0);
    assert!(tracker.is_complete());
    assert_eq!(tracker.bar_width_css(), "100%");
}

#[test]
fn clock_shifts_to_local_zone() {
    // 2024-01-01T00:00:00Z is 05:30 in IST.
    let midnight_utc = 1_704_067_200_000.0;
    assert_eq!(format_clock(midnight_utc, 330, "IST"), "05:30 AM IST");
    // 07:45Z -> 13:15 IST
    let later = midnight_utc + (7.0 * 60.0 + 45.0) * 60_000.0;
    assert_eq!(format_clock(later, 330, "IST"), "01:15 PM IST");
    // 18:30Z -> midnight IST
    let wrap = midnight_utc + 18.5 * 3_600_000.0;
    assert_eq!(format_clock(wrap, 330, "IST"), "12:00 AM IST");
    assert_eq!(format_clock(midnight_utc, 0, "UTC"), "12:00 AM UTC");
}
