#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use geoscript::math::Point3;
use geoscript::script::{EntityKind, EntityRef, OrientedCurve};
use geoscript::Geometry;

fn p(x: f64, y: f64) -> Point3 {
    Point3::new(x, y, 0.0)
}

/// A disc-like domain: a B-spline arc closed by a straight chord, with a
/// square hole.
fn build(geom: &mut Geometry) {
    geom.add_raw_code("Mesh.CharacteristicLengthMax = 0.25;");

    let arc: Vec<_> = [(0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0)]
        .iter()
        .map(|&(x, y)| geom.add_point_with_lcar(p(x, y), 0.1))
        .collect();
    let spline = geom.add_bspline(&arc).unwrap();
    let chord = geom.add_line(arc[3], arc[0]).unwrap();
    let outer = geom
        .add_curve_loop(&[spline.into(), chord.into()])
        .unwrap();

    let hole: Vec<_> = [(1.5, 0.5), (2.5, 0.5), (2.5, 1.0), (1.5, 1.0)]
        .iter()
        .map(|&(x, y)| geom.add_point(p(x, y)))
        .collect();
    let sides: Vec<_> = (0..4)
        .map(|i| geom.add_line(hole[i], hole[(i + 1) % 4]).unwrap())
        .collect();
    let inner = geom
        .add_curve_loop(&sides.iter().rev().map(|&c| OrientedCurve::reversed(c)).collect::<Vec<_>>())
        .unwrap();

    geom.add_plane_surface(outer, &[inner]).unwrap();
}

const EXPECTED: &str = "\
Mesh.CharacteristicLengthMax = 0.25;
p0 = newp;
Point(p0) = {0.0, 0.0, 0.0, 0.1};
p1 = newp;
Point(p1) = {1.0, 2.0, 0.0, 0.1};
p2 = newp;
Point(p2) = {3.0, 2.0, 0.0, 0.1};
p3 = newp;
Point(p3) = {4.0, 0.0, 0.0, 0.1};
l0 = newl;
BSpline(l0) = {p0, p1, p2, p3};
l1 = newl;
Line(l1) = {p3, p0};
ll0 = newll;
Line Loop(ll0) = {l0, l1};
p4 = newp;
Point(p4) = {1.5, 0.5, 0.0};
p5 = newp;
Point(p5) = {2.5, 0.5, 0.0};
p6 = newp;
Point(p6) = {2.5, 1.0, 0.0};
p7 = newp;
Point(p7) = {1.5, 1.0, 0.0};
l2 = newl;
Line(l2) = {p4, p5};
l3 = newl;
Line(l3) = {p5, p6};
l4 = newl;
Line(l4) = {p6, p7};
l5 = newl;
Line(l5) = {p7, p4};
ll1 = newll;
Line Loop(ll1) = {-l5, -l4, -l3, -l2};
s0 = news;
Plane Surface(s0) = {ll0, ll1};";

#[test]
fn script_matches_expected_text() {
    let mut geom = Geometry::new();
    build(&mut geom);
    assert_eq!(geom.get_code(), EXPECTED);
}

#[test]
fn get_code_is_idempotent() {
    let mut geom = Geometry::new();
    build(&mut geom);
    assert_eq!(geom.get_code(), geom.get_code());
}

#[test]
fn no_tag_is_used_before_it_is_bound() {
    let mut geom = Geometry::new();
    build(&mut geom);

    let mut bound = HashSet::new();
    for line in geom.get_code().lines() {
        if let Some((tag, _)) = line.split_once(" = new") {
            assert!(bound.insert(tag.to_owned()), "{tag} bound twice");
            continue;
        }
        let Some((head, body)) = line.split_once(" = {") else {
            continue;
        };
        let own = head
            .split_once('(')
            .and_then(|(_, rest)| rest.strip_suffix(')'))
            .unwrap();
        assert!(bound.contains(own), "{own} defined before binding");
        for referenced in body.trim_end_matches("};").split(", ") {
            let referenced = referenced.trim_start_matches('-');
            if referenced.starts_with(|c: char| c.is_ascii_alphabetic()) {
                assert!(bound.contains(referenced), "{referenced} used before binding");
            }
        }
    }
}

#[test]
fn tags_increase_per_kind() {
    let mut geom = Geometry::new();
    build(&mut geom);

    let mut last: Vec<(EntityKind, usize)> = Vec::new();
    for entity in geom.entities() {
        let tag = match entity {
            EntityRef::Point(id) => geom.point(id).unwrap().tag(),
            EntityRef::Curve(id) => geom.curve(id).unwrap().tag(),
            EntityRef::CurveLoop(id) => geom.curve_loop(id).unwrap().tag(),
            EntityRef::Surface(id) => geom.surface(id).unwrap().tag(),
        };
        if let Some(prev) = last.iter_mut().find(|(k, _)| *k == tag.kind()) {
            assert!(tag.index() > prev.1);
            prev.1 = tag.index();
        } else {
            assert_eq!(tag.index(), 0);
            last.push((tag.kind(), tag.index()));
        }
    }
    assert_eq!(last.len(), 4);
}

#[test]
fn sessions_are_independent() {
    let mut first = Geometry::new();
    let mut second = Geometry::new();
    first.add_point(p(0.0, 0.0));
    first.add_point(p(1.0, 0.0));
    second.add_point(p(5.0, 5.0));
    assert_eq!(second.get_code(), "p0 = newp;\nPoint(p0) = {5.0, 5.0, 0.0};");
}
