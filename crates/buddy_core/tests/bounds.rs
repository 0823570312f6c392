use buddy_core::{
    bounce, Point, ScreenBounds, BOUNCE_BOTTOM_INSET, BOUNCE_LEFT, BOUNCE_RIGHT_INSET, BOUNCE_TOP,
    DRAG_BOTTOM_INSET, DRAG_LEFT, DRAG_RIGHT_INSET, DRAG_TOP,
};

#[test]
fn bounds_combine_width_and_take_minimum_height() {
    let bounds = ScreenBounds::from_displays([(1920, 1080), (1280, 1024)]).unwrap();
    assert_eq!(bounds.width, 3200);
    assert_eq!(bounds.height, 1024);

    let single = ScreenBounds::from_displays([(2560, 1440)]).unwrap();
    assert_eq!(single.width, 2560);
    assert_eq!(single.height, 1440);

    assert_eq!(ScreenBounds::from_displays([]), None);
}

#[test]
fn bounce_reflects_and_clamps_for_any_position_and_direction() {
    let bounds = ScreenBounds {
        width: 2000,
        height: 1000,
    };
    let max_x = bounds.width - BOUNCE_RIGHT_INSET;
    let max_y = bounds.height - BOUNCE_BOTTOM_INSET;
    let dirs = [(4, 4), (4, -4), (-4, 4), (-4, -4)];

    for x in (-400..2400).step_by(37) {
        for y in (-400..1400).step_by(31) {
            for dir in dirs {
                let (pos, out) = bounce(bounds, Point { x, y }, dir);
                assert!(pos.x >= BOUNCE_LEFT && pos.x <= max_x, "x escaped: {pos:?}");
                assert!(pos.y >= BOUNCE_TOP && pos.y <= max_y, "y escaped: {pos:?}");
                if x < BOUNCE_LEFT {
                    assert!(out.0 > 0, "left bounce must head right");
                }
                if x > max_x {
                    assert!(out.0 < 0, "right bounce must head left");
                }
                if y < BOUNCE_TOP {
                    assert!(out.1 > 0, "top bounce must head down");
                }
                if y > max_y {
                    assert!(out.1 < 0, "bottom bounce must head up");
                }
            }
        }
    }
}

#[test]
fn bounce_leaves_in_bounds_positions_untouched() {
    let bounds = ScreenBounds {
        width: 1920,
        height: 1080,
    };
    let pos = Point { x: 500, y: 400 };
    let dir = (-4, 4);
    assert_eq!(bounce(bounds, pos, dir), (pos, dir));
}

#[test]
fn drag_clamp_respects_its_own_margins() {
    let bounds = ScreenBounds {
        width: 1920,
        height: 1080,
    };
    let clamped = bounds.clamp_drag(Point { x: -500, y: 5000 });
    assert_eq!(clamped.x, DRAG_LEFT);
    assert_eq!(clamped.y, bounds.height - DRAG_BOTTOM_INSET);

    let clamped = bounds.clamp_drag(Point { x: 5000, y: -500 });
    assert_eq!(clamped.x, bounds.width - DRAG_RIGHT_INSET);
    assert_eq!(clamped.y, DRAG_TOP);

    let inside = Point { x: 300, y: 300 };
    assert_eq!(bounds.clamp_drag(inside), inside);
}
