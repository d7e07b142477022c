use chrono::NaiveDate;
use contribution_graph_core::models::color::Rgb;
use contribution_graph_core::models::event::Event;
use contribution_graph_core::models::options::GraphOptions;
use contribution_graph_core::models::plan::{Cell, DrawPlan, Label};
use contribution_graph_core::models::window::WindowPolicy;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Rgb
// ═══════════════════════════════════════════════════════════════════

mod rgb {
    use super::*;

    #[test]
    fn parse_lowercase() {
        let c = Rgb::parse("#3e3eff").unwrap();
        assert_eq!((c.r, c.g, c.b), (0x3e, 0x3e, 0xff));
    }

    #[test]
    fn parse_uppercase() {
        let c = Rgb::parse("#3E3EFF").unwrap();
        assert_eq!((c.r, c.g, c.b), (0x3e, 0x3e, 0xff));
    }

    #[test]
    fn parse_black_and_white() {
        assert_eq!(Rgb::parse("#000000").unwrap(), Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(
            Rgb::parse("#ffffff").unwrap(),
            Rgb { r: 255, g: 255, b: 255 }
        );
    }

    #[test]
    fn parse_rejects_missing_hash() {
        assert!(Rgb::parse("3e3eff").is_err());
    }

    #[test]
    fn parse_rejects_short_literal() {
        assert!(Rgb::parse("#3e3ef").is_err());
    }

    #[test]
    fn parse_rejects_long_literal() {
        assert!(Rgb::parse("#3e3efff").is_err());
    }

    #[test]
    fn parse_rejects_alpha_suffix() {
        // The calendar-year dark empty color carries alpha, but base
        // colors never do.
        assert!(Rgb::parse("#94949480").is_err());
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        assert!(Rgb::parse("#zzzzzz").is_err());
    }

    #[test]
    fn parse_rejects_empty_string() {
        assert!(Rgb::parse("").is_err());
    }

    #[test]
    fn shade_toward_white() {
        let c = Rgb::parse("#3e3eff").unwrap();
        assert_eq!(c.shade(0.2).to_hex(), "#6565ff");
    }

    #[test]
    fn shade_toward_black() {
        let c = Rgb::parse("#3e3eff").unwrap();
        assert_eq!(c.shade(-0.6).to_hex(), "#191966");
    }

    #[test]
    fn shade_zero_is_identity() {
        let c = Rgb::parse("#3e3eff").unwrap();
        assert_eq!(c.shade(0.0), c);
    }

    #[test]
    fn shade_full_positive_is_white() {
        let c = Rgb::parse("#3e3eff").unwrap();
        assert_eq!(c.shade(1.0).to_hex(), "#ffffff");
    }

    #[test]
    fn shade_full_negative_is_black() {
        let c = Rgb::parse("#3e3eff").unwrap();
        assert_eq!(c.shade(-1.0).to_hex(), "#000000");
    }

    #[test]
    fn to_hex_pads_small_channels() {
        let c = Rgb { r: 1, g: 2, b: 3 };
        assert_eq!(c.to_hex(), "#010203");
    }

    #[test]
    fn display_matches_to_hex() {
        let c = Rgb::parse("#3e3eff").unwrap();
        assert_eq!(c.to_string(), "#3e3eff");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  WindowPolicy
// ═══════════════════════════════════════════════════════════════════

mod window_policy {
    use super::*;

    #[test]
    fn calendar_year_shade_range() {
        assert_eq!(WindowPolicy::CalendarYear.shade_range(), (-0.2, 0.4));
    }

    #[test]
    fn rolling_shade_range_darkens_only() {
        let (offset, span) = WindowPolicy::Rolling365.shade_range();
        assert_eq!((offset, span), (-0.6, 0.6));
        // Top of the range is exactly the base color, never lighter.
        assert_eq!(offset + span, 0.0);
    }

    #[test]
    fn calendar_year_empty_colors() {
        assert_eq!(WindowPolicy::CalendarYear.empty_color(false), "#f0f0f0");
        assert_eq!(WindowPolicy::CalendarYear.empty_color(true), "#94949480");
    }

    #[test]
    fn rolling_empty_colors() {
        assert_eq!(WindowPolicy::Rolling365.empty_color(false), "#ebedf0");
        assert_eq!(WindowPolicy::Rolling365.empty_color(true), "#161b22");
    }

    #[test]
    fn label_sets_differ_per_policy() {
        assert!(WindowPolicy::CalendarYear.shows_day_labels());
        assert!(WindowPolicy::CalendarYear.shows_year_label());
        assert!(!WindowPolicy::Rolling365.shows_day_labels());
        assert!(!WindowPolicy::Rolling365.shows_year_label());
    }

    #[test]
    fn display_names() {
        assert_eq!(WindowPolicy::CalendarYear.to_string(), "calendar-year");
        assert_eq!(WindowPolicy::Rolling365.to_string(), "rolling-365");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Event
// ═══════════════════════════════════════════════════════════════════

mod event {
    use super::*;

    #[test]
    fn new_stores_fields() {
        let e = Event::new("2025-03-05", 4.0);
        assert_eq!(e.occurred_at, "2025-03-05");
        assert_eq!(e.amount, 4.0);
    }

    #[test]
    fn zero_amount_preserved() {
        assert_eq!(Event::new("2025-03-05", 0.0).amount, 0.0);
    }

    #[test]
    fn negative_amount_preserved() {
        assert_eq!(Event::new("2025-03-05", -3.7).amount, -3.7);
    }

    #[test]
    fn serde_roundtrip_json() {
        let e = Event::new("2025-03-05T10:30:00Z", 2.5);
        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  GraphOptions
// ═══════════════════════════════════════════════════════════════════

mod options {
    use super::*;

    #[test]
    fn defaults() {
        let o = GraphOptions::default();
        assert_eq!(o.square_size, 12.0);
        assert_eq!(o.square_gap, 3.0);
        assert_eq!(o.padding, 25.0);
        assert_eq!(o.color, "#3e3eff");
    }

    #[test]
    fn step_is_size_plus_gap() {
        assert_eq!(GraphOptions::default().step(), 15.0);
        let o = GraphOptions {
            square_size: 10.0,
            square_gap: 2.0,
            ..GraphOptions::default()
        };
        assert_eq!(o.step(), 12.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Cell / Label / DrawPlan
// ═══════════════════════════════════════════════════════════════════

mod plan {
    use super::*;

    fn sample_cell(total: f64) -> Cell {
        Cell {
            date: d(2025, 3, 5),
            total,
            column: 9,
            row: 0,
            x: 190.0,
            y: 45.0,
            fill_color: "#6565ff".to_string(),
        }
    }

    #[test]
    fn tooltip_whole_total() {
        assert_eq!(sample_cell(4.0).tooltip_text(), "4 activity on 2025-03-05");
    }

    #[test]
    fn tooltip_fractional_total() {
        assert_eq!(
            sample_cell(4.5).tooltip_text(),
            "4.5 activity on 2025-03-05"
        );
    }

    #[test]
    fn tooltip_zero_total() {
        assert_eq!(sample_cell(0.0).tooltip_text(), "0 activity on 2025-03-05");
    }

    #[test]
    fn draw_plan_serde_roundtrip() {
        let plan = DrawPlan {
            cells: vec![sample_cell(4.0)],
            month_labels: vec![Label {
                text: "Mar".to_string(),
                x: 55.0,
                y: 35.0,
                font_size: 10.0,
                bold: false,
            }],
            day_labels: Vec::new(),
            year_label: Some(Label {
                text: "2025".to_string(),
                x: 25.0,
                y: 20.0,
                font_size: 12.0,
                bold: true,
            }),
            canvas_width: 875.0,
            canvas_height: 175.0,
            square_size: 12.0,
            corner_radius: 2.0,
            empty_color_light: "#f0f0f0".to_string(),
            empty_color_dark: "#94949480".to_string(),
        };
        let json = plan.to_json().unwrap();
        let back: DrawPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }
}
