//! This module provides convenient macros for creating points, control curves and grids.

/// Macro for creating a Point3
#[macro_export]
macro_rules! pt3 {
    ($x:expr, $y:expr, $z:expr) => {
        $crate::data::Point3::new($x as f64, $y as f64, $z as f64)
    };
}

/// Macro for creating a control curve from 4 `(x, y, z)` tuples
#[macro_export]
macro_rules! control_curve {
    ([$($point:expr),*]) => {{
        let points = [$($point),*];
        assert_eq!(points.len(), 4, "Control curve requires exactly 4 points");
        $crate::data::ControlCurve::new(
            $crate::pt3!(points[0].0, points[0].1, points[0].2),
            $crate::pt3!(points[1].0, points[1].1, points[1].2),
            $crate::pt3!(points[2].0, points[2].1, points[2].2),
            $crate::pt3!(points[3].0, points[3].1, points[3].2),
        )
    }};
}

/// Macro for creating a control grid from 4 control curves
#[macro_export]
macro_rules! control_grid {
    ([$($curve:expr),*]) => {{
        let curves = [$($curve),*];
        assert_eq!(curves.len(), 4, "Control grid requires exactly 4 curves");
        $crate::data::ControlGrid::new(curves)
    }};
}
