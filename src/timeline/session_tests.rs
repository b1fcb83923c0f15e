//! Unit tests for the timeline session

#[cfg(test)]
mod tests {
    use crate::testing::{bucket_map, daily_buckets};
    use crate::timeline::{SessionSettings, TimelineError, TimelineOrder, TimelineSession, ViewportSignal, WindowError, WindowRange};
    use std::time::{Duration, Instant};

    fn settings(order: TimelineOrder) -> SessionSettings {
        SessionSettings {
            min_range: 3,
            max_range: 6,
            extend_step: 2,
            visibility_delay: Duration::from_millis(100),
            order,
        }
    }

    #[test]
    fn test_oldest_first_window_follows_scroll() {
        let mut session = TimelineSession::new(daily_buckets(10), settings(TimelineOrder::OldestFirst)).unwrap();
        assert_eq!(session.window().range(), WindowRange::new(0, 3));

        let visible = session.handle(ViewportSignal::ScrolledNearBottom).unwrap().to_vec();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0], "2020-01-01");

        session.handle(ViewportSignal::ScrolledNearBottom).unwrap();
        assert_eq!(session.window().range(), WindowRange::new(1, 7));

        session.handle(ViewportSignal::ScrolledNearTop).unwrap();
        assert_eq!(session.window().range(), WindowRange::new(0, 6));
    }

    #[test]
    fn test_newest_first_is_default_display_order() {
        let session = TimelineSession::new(daily_buckets(5), settings(TimelineOrder::NewestFirst)).unwrap();
        let dates: Vec<&str> = session.sections().iter().map(|s| s.date).collect();
        assert_eq!(dates, vec!["2020-01-05", "2020-01-04", "2020-01-03"]);
    }

    #[test]
    fn test_jump_to_date() {
        let mut session = TimelineSession::new(daily_buckets(10), settings(TimelineOrder::OldestFirst)).unwrap();

        let visible = session.handle(ViewportSignal::JumpTo("2020-01-05".into())).unwrap().to_vec();
        assert_eq!(visible, vec!["2020-01-05", "2020-01-06", "2020-01-07"]);

        let err = session.handle(ViewportSignal::JumpTo("1990-01-01".into())).unwrap_err();
        assert!(matches!(err, TimelineError::Window(WindowError::KeyNotFound(_))));
        assert_eq!(session.window().range(), WindowRange::new(4, 7));
    }

    #[test]
    fn test_visibility_signals_reveal_after_delay() {
        let mut session = TimelineSession::new(daily_buckets(10), settings(TimelineOrder::OldestFirst)).unwrap();
        let t0 = Instant::now();

        session
            .handle(ViewportSignal::VisibilityChanged { section: 1, visible: true, at: t0 })
            .unwrap();
        assert!(session.poll(t0 + Duration::from_millis(50)).is_empty());
        assert_eq!(session.poll(t0 + Duration::from_millis(100)), vec![1]);

        let revealed: Vec<bool> = session.sections().iter().map(|s| s.revealed).collect();
        assert_eq!(revealed, vec![false, true, false]);
    }

    #[test]
    fn test_preload_reveals_leading_sections() {
        let mut session = TimelineSession::new(daily_buckets(10), settings(TimelineOrder::OldestFirst)).unwrap();

        assert_eq!(session.preload(400, 200), vec![0, 1]);
        assert_eq!(session.preload(400, 200), Vec::<usize>::new());
        // estimate larger than the window stops at the window edge
        assert_eq!(session.preload(2000, 200), vec![2]);
    }

    #[test]
    fn test_sections_carry_bucket_items() {
        let buckets = bucket_map(&[("2020-01-01", vec![1, 2]), ("2020-01-02", vec![3]), ("2020-01-03", vec![])]);
        let mut config = settings(TimelineOrder::OldestFirst);
        config.min_range = 5;
        config.max_range = 5;
        let session = TimelineSession::new(buckets, config).unwrap();

        let sections = session.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].items.len(), 2);
        assert_eq!(sections[1].position, 1);
        assert_eq!(sections[1].items[0].id, 3);
    }

    #[test]
    fn test_open_presentation_spans_all_dates() {
        let buckets = bucket_map(&[("2020-01-01", vec![1, 2]), ("2020-01-02", vec![3, 4]), ("2020-01-03", vec![5])]);
        let session = TimelineSession::new(buckets, settings(TimelineOrder::NewestFirst)).unwrap();

        let slides = session.open_presentation(4).unwrap();
        let ids: Vec<i64> = slides.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![5, 3, 4, 1, 2]);
        assert_eq!(slides.cursor(), 2);

        assert!(matches!(session.open_presentation(99), Err(TimelineError::Slide(_))));
    }

    #[test]
    fn test_invalid_settings() {
        let mut config = settings(TimelineOrder::OldestFirst);
        config.max_range = 1;
        let result = TimelineSession::new(daily_buckets(3), config);
        assert!(matches!(result, Err(TimelineError::Window(WindowError::InvalidBounds { .. }))));
    }

    #[test]
    fn test_reload_resets_state() {
        let mut session = TimelineSession::new(daily_buckets(10), settings(TimelineOrder::OldestFirst)).unwrap();
        session.preload(400, 200);
        session.handle(ViewportSignal::ScrolledNearBottom).unwrap();

        session.reload(daily_buckets(4), settings(TimelineOrder::OldestFirst)).unwrap();
        assert_eq!(session.window().range(), WindowRange::new(0, 3));
        assert!(!session.gate().is_revealed(0));
        assert_eq!(session.buckets().len(), 4);
    }

    #[test]
    fn test_visibility_outside_window_ignored() {
        let mut session = TimelineSession::new(daily_buckets(10), settings(TimelineOrder::OldestFirst)).unwrap();
        let t0 = Instant::now();

        session
            .handle(ViewportSignal::VisibilityChanged { section: 8, visible: true, at: t0 })
            .unwrap();
        assert!(!session.gate().is_pending(8));
        assert!(session.poll(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_invisible_after_scroll_still_cancels() {
        let mut session = TimelineSession::new(daily_buckets(10), settings(TimelineOrder::OldestFirst)).unwrap();
        let t0 = Instant::now();

        session
            .handle(ViewportSignal::VisibilityChanged { section: 0, visible: true, at: t0 })
            .unwrap();
        session.handle(ViewportSignal::JumpTo("2020-01-06".into())).unwrap();
        session
            .handle(ViewportSignal::VisibilityChanged { section: 0, visible: false, at: t0 })
            .unwrap();

        assert!(!session.gate().is_pending(0));
        assert!(session.poll(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_reload_adopts_new_delay_and_keeps_state_on_error() {
        let mut session = TimelineSession::new(daily_buckets(10), settings(TimelineOrder::OldestFirst)).unwrap();
        let mut slower = settings(TimelineOrder::OldestFirst);
        slower.visibility_delay = Duration::from_millis(500);

        session.reload(daily_buckets(6), slower).unwrap();
        assert_eq!(session.gate().delay(), Duration::from_millis(500));

        let mut broken = slower;
        broken.max_range = 1;
        assert!(session.reload(daily_buckets(2), broken).is_err());
        assert_eq!(session.buckets().len(), 6);
    }

    #[test]
    fn test_empty_payload() {
        let mut session = TimelineSession::new(bucket_map(&[]), settings(TimelineOrder::NewestFirst)).unwrap();
        assert!(session.sections().is_empty());
        assert!(session.handle(ViewportSignal::ScrolledNearBottom).unwrap().is_empty());
        assert!(session.handle(ViewportSignal::JumpTo("2020-01-01".into())).unwrap().is_empty());
    }
}
