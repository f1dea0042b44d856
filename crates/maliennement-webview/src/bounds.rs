//! Coordinate conversion between shell rects and wry rects.

use maliennement_common::Rect;

/// Convert a logical [`Rect`] to a `wry::Rect`.
pub fn to_wry_rect(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_converts_to_logical_wry_rect() {
        let rect = Rect {
            x: 178.0,
            y: 429.5,
            width: 56.0,
            height: 56.0,
        };
        let wry_rect = to_wry_rect(&rect);

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 178.0).abs() < f64::EPSILON);
                assert!((pos.y - 429.5).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 56.0).abs() < f64::EPSILON);
                assert!((size.height - 56.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn zero_rect_converts() {
        let wry_rect = to_wry_rect(&Rect::from_size(0.0, 0.0));
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert_eq!(size.width, 0.0);
                assert_eq!(size.height, 0.0);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
