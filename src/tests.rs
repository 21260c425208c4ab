#[cfg(test)]
mod geometry_tests {
    use crate::math_utils::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn test_weighted_point_equal_weights_is_midpoint() {
        let p = Point::new(1.0, 2.0);
        let q = Point::new(5.0, -4.0);
        assert_eq!(weighted_point(p, q, 1.0, 1.0), Point::new(3.0, -1.0));
        assert_eq!(weighted_point(p, q, 2.5, 2.5), midpoint(p, q));
    }

    #[test]
    fn test_weighted_point_divides_in_ratio() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        // Weight 3 on A pulls the point to a quarter of the way along AB
        assert_close(weighted_point(a, b, 3.0, 1.0), Point::new(1.0, 0.0));
        assert_close(weighted_point(a, b, 1.0, 3.0), Point::new(3.0, 0.0));
    }

    #[test]
    fn test_scaled_point() {
        let p = Point::new(1.0, 1.0);
        let q = Point::new(3.0, 2.0);
        assert_eq!(scaled_point(p, q, 0.0), p);
        assert_close(scaled_point(p, q, 1.0), q);
        assert_close(scaled_point(p, q, -1.0), Point::new(-1.0, 0.0));
        assert_close(scaled_point(p, q, 2.0), Point::new(5.0, 3.0));
    }

    #[test]
    fn test_rotated_point() {
        let pivot = Point::new(1.0, 1.0);
        let p = Point::new(3.0, 1.0);
        assert_eq!(rotated_point(p, pivot, 0.0), p);
        assert_close(rotated_point(p, pivot, FRAC_PI_2), Point::new(1.0, 3.0));
        assert_close(rotated_point(p, pivot, PI), Point::new(-1.0, 1.0));

        let theta = 0.7345;
        let there = rotated_point(p, pivot, theta);
        assert_close(rotated_point(there, pivot, -theta), p);
    }

    #[test]
    fn test_reflected_point() {
        let a = Point::new(0.0, 0.0);
        let c = Point::new(4.0, 3.0);
        let b = Point::new(4.0, 0.0);
        let mirror = reflected_point(b, a, c);
        assert_close(mirror, Point::new(1.12, 3.84));
        assert_close(reflected_point(mirror, a, c), b);

        // Points on the line stay put
        assert_close(reflected_point(Point::new(8.0, 6.0), a, c), Point::new(8.0, 6.0));
    }

    #[test]
    fn test_altitude_foot() {
        let foot = altitude_foot(Point::new(4.0, 0.0), Point::new(0.0, 0.0), Point::new(4.0, 3.0));
        assert_close(foot, Point::new(2.56, 1.92));
    }

    #[test]
    fn test_polygon_area_is_signed() {
        let ccw = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
        ];
        assert!((polygon_area(&ccw) - 6.0).abs() < 1e-12);
        let cw = [ccw[2], ccw[1], ccw[0]];
        assert!((polygon_area(&cw) + 6.0).abs() < 1e-12);
        assert_eq!(polygon_area(&ccw[..2]), 0.0);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(3.0 * FRAC_PI_2) + FRAC_PI_2).abs() < 1e-12);
        assert!((normalize_angle(-3.0 * FRAC_PI_2) - FRAC_PI_2).abs() < 1e-12);
        assert!((normalize_angle(PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(0.25_f64) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_helpers_are_generic_over_f32() {
        let p = euclid::default::Point2D::new(2.0f32, 0.0);
        let pivot = euclid::default::Point2D::new(0.0f32, 0.0);
        let r = rotated_point(p, pivot, std::f32::consts::FRAC_PI_2);
        assert!(r.x.abs() < 1e-6 && (r.y - 2.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod path_tests {
    use crate::math_utils::Point;
    use crate::path::{Path, PathCmd};

    #[test]
    fn test_polygon_ring_closes() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let path = Path::polygon(&pts);
        assert!(path.is_closed());
        let ring = path.ring();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_polyline_stays_open() {
        let path = Path::segment(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert!(!path.is_closed());
        assert_eq!(path.ring().len(), 2);
    }

    #[test]
    fn test_empty_polygon() {
        let path = Path::polygon(&[]);
        assert!(path.is_empty());
        assert!(path.bounds().is_none());
    }

    #[test]
    fn test_circle_bounds() {
        let path = Path::circle(Point::new(10.0, 5.0), 2.0);
        assert!(matches!(path.commands()[0], PathCmd::Arc { .. }));
        let bounds = path.bounds().unwrap();
        assert!((bounds.min.x - 8.0).abs() < 1e-9);
        assert!((bounds.max.x - 12.0).abs() < 1e-9);
        assert!((bounds.min.y - 3.0).abs() < 1e-9);
        assert!((bounds.max.y - 7.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod tangram_tests {
    use crate::math_utils::{polygon_area, Point};
    use crate::tangram::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn test_construction_points() {
        let rect = EgyptianRectangle::new(1.0);
        assert_close(rect.center(), Point::new(2.0, 1.5));
        assert_close(rect.foot_f(), Point::new(2.56, 1.92));
        assert_close(rect.foot_k(), Point::new(2.56, 0.0));
    }

    #[test]
    fn test_piece_areas() {
        let rect = EgyptianRectangle::new(1.0);
        let pieces = rect.lower_pieces();
        let expected = [2.4576, 2.16, 1.3824];
        for (piece, area) in pieces.iter().zip(expected) {
            assert!(
                (piece.area() - area).abs() < EPS,
                "{} has area {}",
                piece.label(),
                piece.area()
            );
        }
    }

    #[test]
    fn test_pieces_tile_the_rectangle() {
        let unit = 60.0;
        let rect = EgyptianRectangle::new(unit);
        let pieces = rect.pieces();
        assert_eq!(pieces.len(), 6);
        let total: f64 = pieces.iter().map(|p| p.area()).sum();
        assert!((total - 12.0 * unit * unit).abs() < 1e-6);
        assert!((polygon_area(&rect.corners()) - total).abs() < 1e-6);
    }

    #[test]
    fn test_second_copies_are_half_turns() {
        let rect = EgyptianRectangle::new(1.0);
        let pieces = rect.pieces();
        let upper_large = pieces
            .iter()
            .find(|p| p.kind == PieceKind::Large && p.copy == 2)
            .unwrap();
        // The large piece's corner A lands on C
        assert_close(upper_large.triangle.a, rect.c);
    }

    #[test]
    fn test_silhouettes_keep_the_area() {
        let rect = EgyptianRectangle::new(1.0);
        for silhouette in Silhouette::ALL {
            let pieces = silhouette.arrange(&rect);
            let total: f64 = pieces.iter().map(|p| p.area()).sum();
            let outline = polygon_area(&silhouette.outline(&rect));
            assert!(
                (outline - 12.0).abs() < EPS,
                "{} outline area {}",
                silhouette.name(),
                outline
            );
            assert!((total - outline).abs() < EPS);
        }
    }

    #[test]
    fn test_silhouette_outlines() {
        let rect = EgyptianRectangle::new(1.0);
        let tall = Silhouette::TallTriangle.outline(&rect);
        assert_close(tall[1], Point::new(4.0, -3.0));
        let wide = Silhouette::WideTriangle.outline(&rect);
        assert_close(wide[1], Point::new(8.0, 0.0));
        let para = Silhouette::Parallelogram.outline(&rect);
        assert_close(para[2], Point::new(8.0, 3.0));
    }

    #[test]
    fn test_piece_paths_wind_counter_clockwise() {
        let rect = EgyptianRectangle::new(1.0);
        for silhouette in Silhouette::ALL {
            for piece in silhouette.arrange(&rect) {
                let ring = piece.path().vertices();
                assert!(
                    polygon_area(&ring) > 0.0,
                    "{} in {} winds clockwise",
                    piece.label(),
                    silhouette.name()
                );
            }
        }
    }

    #[test]
    fn test_split_gives_similar_triangles() {
        let t = EgyptianRectangle::new(1.0).lower_triangle();
        let (first, second) = t.split();
        assert!((first.area() + second.area() - t.area()).abs() < EPS);
        for child in [first, second] {
            let ratio = child.hypotenuse() / t.hypotenuse();
            assert!((child.area() / t.area() - ratio * ratio).abs() < EPS);
        }
        assert!((first.hypotenuse() - 4.0).abs() < EPS);
        assert!((second.hypotenuse() - 3.0).abs() < EPS);
    }

    #[test]
    fn test_spiral() {
        let t = EgyptianRectangle::new(1.0).lower_triangle();
        let tris = spiral(t, 5);
        assert_eq!(tris.len(), 6);
        let total: f64 = tris.iter().map(|t| t.area()).sum();
        assert!((total - t.area()).abs() < EPS);
        assert_eq!(spiral(t, 0), vec![t]);
    }

    #[test]
    fn test_incircle_and_circumcircle() {
        let t = EgyptianRectangle::new(1.0).lower_triangle();
        assert_close(t.incenter(), Point::new(3.0, 1.0));
        assert!((t.inradius() - 1.0).abs() < EPS);
        assert_close(t.circumcenter(), Point::new(2.0, 1.5));
    }

    #[test]
    fn test_piece_labels() {
        let rect = EgyptianRectangle::new(1.0);
        let labels: Vec<String> = rect.pieces().iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["L1", "M1", "S1", "L2", "M2", "S2"]);
    }
}

#[cfg(test)]
mod color_tests {
    use crate::color_utils::*;
    use crate::style::{Color, LineStyle, Style, ACCENT, PAPER};

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ff8000"), Color::new(255, 128, 0, 255));
        assert_eq!(parse_color("ff800080"), Color::new(255, 128, 0, 128));
        assert_eq!(parse_color("transparent"), Color::new(0, 0, 0, 0));
        assert_eq!(parse_color(""), Color::new(0, 0, 0, 0));
        assert_eq!(parse_color("#zz0000"), Color::new(0, 0, 0, 255));
    }

    #[test]
    fn test_parse_color_result_errors() {
        assert!(parse_color_result("#12345").is_err());
        assert!(parse_color_result("#gg0000").is_err());
        assert!(parse_color_result("#éé00").is_err());
        assert_eq!(parse_color_result(" #000000 "), Ok(Color::new(0, 0, 0, 255)));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(Color::new(0xd4, 0xa0, 0x17, 255)), "#d4a017");
    }

    #[test]
    fn test_fill_and_stroke_detection() {
        let outline = Style::outline();
        assert!(has_stroke(&outline));
        assert!(!has_fill(&outline));

        let solid = Style::solid("#ff0000");
        assert!(has_fill(&solid));
        assert!(!has_stroke(&solid));

        assert!(!has_fill(&Style::solid("transparent")));
        assert!(!has_stroke(&Style::outline().width(0.0)));
    }

    #[test]
    fn test_dash_arrays() {
        assert_eq!(LineStyle::Solid.dash_array(2.0), None);
        assert_eq!(LineStyle::Dashed.dash_array(2.0), Some(vec![8.0, 10.0]));
        assert_eq!(LineStyle::Dotted.dash_array(1.0), Some(vec![1.5, 7.0]));
        assert_eq!(Style::guide().dasharray_attr().as_deref(), Some("8,9"));
    }

    #[test]
    fn test_color_builders() {
        let style = Style::outline().fill_color(PAPER).stroke_color(ACCENT);
        assert_eq!(style.fill, Some(PAPER));
        assert_eq!(style.stroke, Some(ACCENT));
        assert_eq!(to_hex(ACCENT), "#c0392b");
        assert_eq!(to_hex(PAPER), "#fbf6e9");
    }
}

#[cfg(test)]
mod renderer_tests {
    use crate::math_utils::Point;
    use crate::models::{Anchor, Drawing, Label};
    use crate::path::Path;
    use crate::renderer::{calculate_viewbox, fmt_num, generate_svg, path_data};
    use crate::style::{Color, Style};

    fn triangle_drawing() -> Drawing {
        let mut drawing = Drawing::new("triangle", "Test triangle");
        drawing.push(
            Path::polygon(&[
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 50.0),
            ]),
            Style::filled("#d4a017").width(2.0),
        );
        drawing
    }

    #[test]
    fn test_calculate_viewbox_empty() {
        let viewbox = calculate_viewbox(&Drawing::default());

        assert_eq!(viewbox.min_x, 0.0);
        assert_eq!(viewbox.min_y, 0.0);
        assert_eq!(viewbox.width, 800.0);
        assert_eq!(viewbox.height, 600.0);
    }

    #[test]
    fn test_calculate_viewbox_flips_y() {
        let viewbox = calculate_viewbox(&triangle_drawing());

        assert_eq!(viewbox.min_x, -25.0); // 0 - 1 half stroke - 24 padding
        assert_eq!(viewbox.min_y, -75.0); // -50 - 1 - 24
        assert_eq!(viewbox.width, 150.0);
        assert_eq!(viewbox.height, 100.0);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(153.60000000000002), "153.6");
        assert_eq!(fmt_num(240.0), "240");
        assert_eq!(fmt_num(-0.0000001), "0");
        assert_eq!(fmt_num(-1.25), "-1.25");
        assert_eq!(fmt_num(0.1234), "0.123");
    }

    #[test]
    fn test_polygon_path_data() {
        let path = Path::polygon(&[
            Point::new(0.0, 0.0),
            Point::new(240.0, 0.0),
            Point::new(240.0, 180.0),
        ]);
        assert_eq!(path_data(&path), "M 0 0 L 240 0 L 240 -180 Z");
    }

    #[test]
    fn test_circle_path_data() {
        let path = Path::circle(Point::new(0.0, 0.0), 10.0);
        assert_eq!(
            path_data(&path),
            "M 10 0 A 10 10 0 0 0 -10 0 A 10 10 0 0 0 10 0 Z"
        );
    }

    #[test]
    fn test_arc_after_line_joins() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0));
        path.arc(Point::new(0.0, 0.0), 5.0, 0.0, -std::f64::consts::FRAC_PI_2);
        assert_eq!(path_data(&path), "M 0 0 L 5 0 A 5 5 0 0 1 0 5");
    }

    #[test]
    fn test_generate_svg_basic() {
        let svg = generate_svg(&triangle_drawing(), None);

        assert!(svg.contains("<svg"));
        assert!(svg.contains("viewBox=\"-25 -75 150 100\""));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("<title>Test triangle</title>"));
        assert!(svg.contains("fill=\"#d4a017\""));
        assert!(svg.contains("stroke=\"#1e1e1e\""));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn test_background_rect() {
        let svg = generate_svg(&triangle_drawing(), Some(Color::new(255, 255, 255, 255)));
        assert!(svg.contains("<rect x=\"-25\" y=\"-75\" width=\"150\" height=\"100\" fill=\"#ffffff\"/>"));

        let transparent = generate_svg(&triangle_drawing(), Some(Color::new(0, 0, 0, 0)));
        assert!(!transparent.contains("<rect"));
    }

    #[test]
    fn test_solid_fill_has_no_stroke() {
        let mut drawing = Drawing::new("solid", "");
        drawing.push(
            Path::polygon(&[
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
            ]),
            Style::solid("#ff0000"),
        );
        let svg = generate_svg(&drawing, None);
        assert!(svg.contains("fill=\"#ff0000\""));
        assert!(svg.contains("stroke=\"none\""));
    }

    #[test]
    fn test_dashed_guide() {
        let mut drawing = Drawing::new("guide", "");
        drawing.push(
            Path::segment(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            Style::guide(),
        );
        let svg = generate_svg(&drawing, None);
        assert!(svg.contains("fill=\"none\""));
        assert!(svg.contains("stroke-dasharray=\"8,9\""));
    }

    #[test]
    fn test_text_rendering() {
        let mut drawing = Drawing::new("label", "");
        drawing.label(Label::new("A & B", Point::new(10.0, 20.0)).italic());
        let svg = generate_svg(&drawing, None);

        assert!(svg.contains("<text x=\"10\" y=\"-20\""));
        assert!(svg.contains("font-style=\"italic\""));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("A &amp; B"));
    }

    #[test]
    fn test_label_anchor_extends_viewbox_one_way() {
        let mut drawing = Drawing::new("anchor", "");
        drawing.label(
            Label::new("AB", Point::new(0.0, 0.0))
                .size(10.0)
                .anchor(Anchor::Start),
        );
        let vb = calculate_viewbox(&drawing);
        assert_eq!((vb.min_x, vb.width), (-24.0, 60.0));
        assert_eq!((vb.min_y, vb.height), (-29.0, 58.0));

        let mut drawing = Drawing::new("anchor", "");
        drawing.label(Label::new("AB", Point::new(0.0, 0.0)).anchor(Anchor::End));
        assert!(generate_svg(&drawing, None).contains("text-anchor=\"end\""));
    }

    #[test]
    fn test_translucent_fill() {
        let mut drawing = Drawing::new("alpha", "");
        drawing.push(
            Path::circle(Point::new(0.0, 0.0), 4.0),
            Style::solid("#00000080"),
        );
        let svg = generate_svg(&drawing, None);
        assert!(svg.contains("fill-opacity=\"0.502\""));
    }
}

#[cfg(test)]
mod figure_tests {
    use crate::error::FigureError;
    use crate::export::{render_figures, ExportOptions, OutputFormat};
    use crate::figures::{find_figure, FIGURES};
    use crate::models::{Anchor, Item};
    use crate::renderer::{calculate_viewbox, generate_svg};
    use crate::tangram::EgyptianRectangle;
    use std::collections::HashSet;
    use std::fs::File;

    #[test]
    fn test_figure_names_are_unique() {
        let names: HashSet<&str> = FIGURES.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), FIGURES.len());
    }

    #[test]
    fn test_find_figure() {
        assert_eq!(find_figure("tangram").unwrap().name, "tangram");
        assert!(matches!(
            find_figure("pyramid"),
            Err(FigureError::UnknownFigure(name)) if name == "pyramid"
        ));
    }

    #[test]
    fn test_every_figure_renders() {
        for figure in FIGURES {
            let drawing = figure.build(60.0);
            assert_eq!(drawing.name, figure.name);
            assert!(drawing.shapes().count() > 0, "{} is empty", figure.name);

            let svg = generate_svg(&drawing, None);
            assert!(svg.starts_with("<svg"), "{}", figure.name);
            assert!(svg.contains("viewBox"));
            assert!(!svg.contains("NaN"), "{} has NaN coordinates", figure.name);
            for (path, _) in drawing.shapes() {
                assert!(
                    path.vertices().iter().all(|p| p.x.is_finite() && p.y.is_finite()),
                    "{} has non-finite coordinates",
                    figure.name
                );
            }
        }
    }

    #[test]
    fn test_closed_paths_close_back_to_start() {
        for figure in FIGURES {
            let drawing = figure.build(50.0);
            for (path, _) in drawing.shapes().filter(|(path, _)| path.is_closed()) {
                let ring = path.ring();
                let first = ring.first().unwrap();
                let last = ring.last().unwrap();
                assert!(
                    (first.x - last.x).abs() < 1e-9 && (first.y - last.y).abs() < 1e-9,
                    "open ring in {}",
                    figure.name
                );
            }
        }
    }

    #[test]
    fn test_tangram_figure_has_six_pieces() {
        let drawing = find_figure("tangram").unwrap().build(60.0);
        let labels: Vec<&str> = drawing.labels().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, ["L1", "M1", "S1", "L2", "M2", "S2"]);
        // Six pieces plus the frame
        assert_eq!(drawing.shapes().count(), 7);
    }

    #[test]
    fn test_incircle_label() {
        let drawing = find_figure("incircle").unwrap().build(60.0);
        assert!(drawing.labels().any(|l| l.text == "r = 1"));
    }

    #[test]
    fn test_unit_scales_the_figure() {
        let small = find_figure("tangram_silhouette").unwrap().build(10.0);
        let large = find_figure("tangram_silhouette").unwrap().build(20.0);
        let bounds = |d: &crate::models::Drawing| match &d.items[0] {
            Item::Shape { path, .. } => path.bounds().unwrap(),
            Item::Label(_) => unreachable!(),
        };
        assert_eq!(bounds(&small).max.x * 2.0, bounds(&large).max.x);
    }

    #[test]
    fn test_json_dump() {
        let drawing = find_figure("egyptian_triangle").unwrap().build(60.0);
        let value = serde_json::to_value(&drawing).unwrap();
        assert_eq!(value["name"], "egyptian_triangle");
        assert_eq!(
            value["items"].as_array().unwrap().len(),
            drawing.items.len()
        );
        assert_eq!(value["items"][0]["kind"], "shape");
    }

    #[test]
    fn test_render_figures_writes_files() {
        let out_dir = std::env::temp_dir().join(format!(
            "tangram-figures-test-{}",
            std::process::id()
        ));
        let figures = [find_figure("tangram").unwrap(), find_figure("incircle").unwrap()];

        let written = render_figures(&figures, 40.0, &out_dir, &ExportOptions::default()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0], out_dir.join("tangram.svg"));
        let content = std::fs::read_to_string(&written[1]).unwrap();
        assert!(content.starts_with("<svg"));

        let json_options = ExportOptions {
            format: OutputFormat::Json,
            ..ExportOptions::default()
        };
        let written = render_figures(&figures[..1], 40.0, &out_dir, &json_options).unwrap();
        assert_eq!(written[0], out_dir.join("tangram.json"));

        let _ = std::fs::remove_dir_all(&out_dir);
    }

    #[test]
    fn test_thales_circle_is_centered_on_the_diagonal() {
        let unit = 60.0;
        let rect = EgyptianRectangle::new(unit);
        let o = rect.lower_triangle().circumcenter();
        assert!((o.x - rect.center().x).abs() < 1e-9 && (o.y - rect.center().y).abs() < 1e-9);

        let drawing = find_figure("thales_circle").unwrap().build(unit);
        let radius = drawing
            .labels()
            .find(|l| l.text.starts_with("R = "))
            .unwrap();
        assert_eq!(radius.text, "R = 2.5");
        assert_eq!(radius.anchor, Anchor::Start);
    }

    #[test]
    fn test_render_png_at_double_density() {
        let out_dir = std::env::temp_dir().join(format!(
            "tangram-figures-png-{}",
            std::process::id()
        ));
        let figures = [
            find_figure("tangram_silhouette").unwrap(),
            find_figure("tangram").unwrap(),
        ];
        let options = ExportOptions {
            format: OutputFormat::Png,
            dpi: Some(192),
            ..ExportOptions::default()
        };

        let written = render_figures(&figures, 60.0, &out_dir, &options).unwrap();
        assert_eq!(written[0], out_dir.join("tangram_silhouette.png"));

        for (figure, path) in figures.iter().zip(&written) {
            let bytes = std::fs::read(path).unwrap();
            assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

            let reader = png::Decoder::new(File::open(path).unwrap())
                .read_info()
                .unwrap();
            let info = reader.info();
            let viewbox = calculate_viewbox(&figure.build(60.0));
            assert!(
                (info.width as f64 - 2.0 * viewbox.width).abs() <= 2.0,
                "{}: {} px for a {} wide viewbox",
                figure.name,
                info.width,
                viewbox.width
            );
            assert!((info.height as f64 - 2.0 * viewbox.height).abs() <= 2.0);
            assert_eq!(info.color_type, png::ColorType::Rgba);
        }

        let _ = std::fs::remove_dir_all(&out_dir);
    }
}
