//! Stateless geometry over figures.
//!
//! Translation mutates the figure in place (the store exclusively owns its
//! sequence, so no aliased references exist). Containment is always *full*
//! containment with inclusive edges, never mere intersection.

use crate::shapes::Figure;

/// Euclidean distance between (ax, ay) and (bx, by).
pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

/// Move a figure by (dx, dy). Lines move both endpoints.
pub fn translate(figure: &mut Figure, dx: i32, dy: i32) {
    match figure {
        Figure::Circle { cx, cy, .. } => {
            *cx += dx;
            *cy += dy;
        }
        Figure::Rectangle { x, y, .. } => {
            *x += dx;
            *y += dy;
        }
        Figure::Line { x1, y1, x2, y2, .. } => {
            *x1 += dx;
            *y1 += dy;
            *x2 += dx;
            *y2 += dy;
        }
    }
}

/// A query region for containment tests. Built from user input, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// (x, y) is the top-left corner.
    Rectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    /// (cx, cy) is the center.
    Circle { cx: i32, cy: i32, radius: i32 },
}

impl Boundary {
    /// Build a boundary from the user-facing kind string (matched
    /// case-insensitively). For a rectangle, p1/p2 are width/height; for a
    /// circle, p1 is the radius and p2 is unused. An unknown kind yields
    /// `None`, and containment against it is answered `false`; the query
    /// fails closed by policy instead of erroring.
    pub fn from_kind(kind: &str, x: i32, y: i32, p1: i32, p2: i32) -> Option<Self> {
        if kind.eq_ignore_ascii_case("rectangle") {
            Some(Boundary::Rectangle {
                x,
                y,
                width: p1,
                height: p2,
            })
        } else if kind.eq_ignore_ascii_case("circle") {
            Some(Boundary::Circle {
                cx: x,
                cy: y,
                radius: p1,
            })
        } else {
            None
        }
    }
}

/// Whether the figure lies entirely inside the boundary, edges inclusive.
///
/// A circle inside a rectangle is judged by its axis-aligned bounding box;
/// a rectangle inside a circle by its four corners; a line always by its
/// two endpoints.
pub fn is_within(figure: &Figure, boundary: &Boundary) -> bool {
    match (figure, boundary) {
        (
            Figure::Circle { cx, cy, radius, .. },
            Boundary::Rectangle {
                x,
                y,
                width,
                height,
            },
        ) => {
            cx - radius >= *x
                && cx + radius <= x + width
                && cy - radius >= *y
                && cy + radius <= y + height
        }
        (
            Figure::Rectangle {
                x,
                y,
                width,
                height,
                ..
            },
            Boundary::Rectangle {
                x: bx,
                y: by,
                width: bw,
                height: bh,
            },
        ) => x >= bx && x + width <= bx + bw && y >= by && y + height <= by + bh,
        (Figure::Line { x1, y1, x2, y2, .. }, Boundary::Rectangle { .. }) => {
            point_in_rect(*x1, *y1, boundary) && point_in_rect(*x2, *y2, boundary)
        }
        (Figure::Circle { cx, cy, radius, .. }, Boundary::Circle { cx: bx, cy: by, radius: br }) => {
            distance((*bx).into(), (*by).into(), (*cx).into(), (*cy).into()) + f64::from(*radius)
                <= f64::from(*br)
        }
        (
            Figure::Rectangle {
                x,
                y,
                width,
                height,
                ..
            },
            Boundary::Circle { .. },
        ) => {
            point_in_circle(*x, *y, boundary)
                && point_in_circle(x + width, *y, boundary)
                && point_in_circle(*x, y + height, boundary)
                && point_in_circle(x + width, y + height, boundary)
        }
        (Figure::Line { x1, y1, x2, y2, .. }, Boundary::Circle { .. }) => {
            point_in_circle(*x1, *y1, boundary) && point_in_circle(*x2, *y2, boundary)
        }
    }
}

fn point_in_rect(px: i32, py: i32, boundary: &Boundary) -> bool {
    match boundary {
        Boundary::Rectangle {
            x,
            y,
            width,
            height,
        } => px >= *x && px <= x + width && py >= *y && py <= y + height,
        Boundary::Circle { .. } => false,
    }
}

fn point_in_circle(px: i32, py: i32, boundary: &Boundary) -> bool {
    match boundary {
        Boundary::Circle { cx, cy, radius } => {
            distance((*cx).into(), (*cy).into(), px.into(), py.into()) <= f64::from(*radius)
        }
        Boundary::Rectangle { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::shapes::strategies::any_figure;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(2.0, 2.0, 2.0, 2.0), 0.0);
    }

    #[test]
    fn translate_moves_every_coordinate() {
        let mut circle = Figure::circle(1, 2, 3, "red").unwrap();
        translate(&mut circle, 10, -5);
        assert_eq!(circle, Figure::circle(11, -3, 3, "red").unwrap());

        let mut line = Figure::line(0, 0, 4, 4, "blue").unwrap();
        translate(&mut line, -1, 1);
        assert_eq!(line, Figure::line(-1, 1, 3, 5, "blue").unwrap());
    }

    #[test]
    fn unknown_boundary_kind_fails_closed() {
        assert_eq!(Boundary::from_kind("triangle", 0, 0, 5, 5), None);
        assert_eq!(Boundary::from_kind("", 0, 0, 5, 5), None);
    }

    #[test]
    fn boundary_kind_is_case_insensitive() {
        assert_eq!(
            Boundary::from_kind("Rectangle", 1, 2, 3, 4),
            Some(Boundary::Rectangle {
                x: 1,
                y: 2,
                width: 3,
                height: 4
            })
        );
        assert_eq!(
            Boundary::from_kind("CIRCLE", 1, 2, 3, 99),
            Some(Boundary::Circle {
                cx: 1,
                cy: 2,
                radius: 3
            })
        );
    }

    #[test]
    fn rectangle_equal_to_its_boundary_is_within() {
        let boundary = Boundary::Rectangle {
            x: 0,
            y: 0,
            width: 10,
            height: 10,
        };
        let rect = Figure::rectangle(0, 0, 10, 10, "red").unwrap();
        assert!(is_within(&rect, &boundary));
    }

    #[test]
    fn circle_in_rectangle_uses_bounding_box() {
        let boundary = Boundary::Rectangle {
            x: 0,
            y: 0,
            width: 10,
            height: 10,
        };
        assert!(is_within(&Figure::circle(5, 5, 5, "red").unwrap(), &boundary));
        assert!(!is_within(&Figure::circle(5, 5, 6, "red").unwrap(), &boundary));
        assert!(!is_within(&Figure::circle(4, 5, 5, "red").unwrap(), &boundary));
    }

    #[test]
    fn line_in_rectangle_checks_both_endpoints() {
        let boundary = Boundary::Rectangle {
            x: 0,
            y: 0,
            width: 10,
            height: 10,
        };
        assert!(is_within(&Figure::line(0, 0, 10, 10, "red").unwrap(), &boundary));
        assert!(!is_within(&Figure::line(0, 0, 11, 10, "red").unwrap(), &boundary));
    }

    #[test]
    fn circle_in_circle_sums_center_distance_and_radius() {
        let boundary = Boundary::Circle {
            cx: 0,
            cy: 0,
            radius: 10,
        };
        assert!(is_within(&Figure::circle(3, 4, 5, "red").unwrap(), &boundary));
        assert!(!is_within(&Figure::circle(3, 4, 6, "red").unwrap(), &boundary));
        // Concentric circle of equal radius sits exactly on the edge.
        assert!(is_within(&Figure::circle(0, 0, 10, "red").unwrap(), &boundary));
    }

    #[test]
    fn rectangle_in_circle_checks_all_corners() {
        let boundary = Boundary::Circle {
            cx: 0,
            cy: 0,
            radius: 5,
        };
        assert!(is_within(&Figure::rectangle(-3, -4, 6, 8, "red").unwrap(), &boundary));
        assert!(!is_within(&Figure::rectangle(-3, -4, 7, 8, "red").unwrap(), &boundary));
    }

    #[test]
    fn line_in_circle_checks_both_endpoints() {
        let boundary = Boundary::Circle {
            cx: 0,
            cy: 0,
            radius: 5,
        };
        assert!(is_within(&Figure::line(-3, -4, 3, 4, "red").unwrap(), &boundary));
        assert!(!is_within(&Figure::line(-3, -4, 6, 0, "red").unwrap(), &boundary));
    }

    proptest! {
        #[test]
        fn translate_then_inverse_restores(
            figure in any_figure(),
            dx in -1000i32..1000,
            dy in -1000i32..1000,
        ) {
            let original = figure.clone();
            let mut moved = figure;
            translate(&mut moved, dx, dy);
            translate(&mut moved, -dx, -dy);
            prop_assert_eq!(moved, original);
        }
    }
}
