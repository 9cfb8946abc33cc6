//! Coordinate conversion between window sizes and wry rects.

use winit::dpi::PhysicalSize;

/// A wry `Rect` covering the whole client area of a window.
pub(super) fn full_window_bounds(size: PhysicalSize<u32>, scale_factor: f64) -> wry::Rect {
    let logical = size.to_logical::<f64>(scale_factor);
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(logical.width, logical.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_start_at_origin() {
        let rect = full_window_bounds(PhysicalSize::new(1280, 800), 1.0);
        match rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!(pos.x.abs() < f64::EPSILON);
                assert!(pos.y.abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
    }

    #[test]
    fn bounds_are_scaled_to_logical() {
        let rect = full_window_bounds(PhysicalSize::new(2560, 1600), 2.0);
        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 1280.0).abs() < f64::EPSILON);
                assert!((size.height - 800.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
