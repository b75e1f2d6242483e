//! Rendering tests covering the full style/shape/explode matrix.

#![allow(missing_docs)]

use assert2::check;
use qstyle::{QueryParams, Style, Value};

fn colors() -> Value {
    Value::sequence(["blue", "black", "brown"])
}

fn rgb() -> Value {
    Value::mapping([("R", "100"), ("G", "200"), ("B", "150")])
}

fn render_one(value: Value, style: Style, explode: bool) -> String {
    let mut params = QueryParams::new();
    params
        .append("color", value, style, explode)
        .expect("valid combination");
    params.render()
}

#[test]
fn matrix_style() {
    check!(render_one(Value::Absent, Style::Matrix, false) == ";color");
    check!(render_one(Value::Absent, Style::Matrix, true) == ";color");
    check!(render_one("blue".into(), Style::Matrix, false) == ";color=blue");
    check!(render_one("blue".into(), Style::Matrix, true) == ";color=blue");
    check!(render_one(colors(), Style::Matrix, false) == ";color=blue,black,brown");
    check!(render_one(colors(), Style::Matrix, true) == ";color=blue;color=black;color=brown");
    check!(render_one(rgb(), Style::Matrix, false) == ";color=R,100,G,200,B,150");
    check!(render_one(rgb(), Style::Matrix, true) == ";R=100;G=200;B=150");
}

#[test]
fn label_style() {
    check!(render_one(Value::Absent, Style::Label, false) == ".");
    check!(render_one(Value::Absent, Style::Label, true) == ".");
    check!(render_one("blue".into(), Style::Label, false) == ".blue");
    check!(render_one("blue".into(), Style::Label, true) == ".blue");
    check!(render_one(colors(), Style::Label, false) == ".blue,black,brown");
    check!(render_one(colors(), Style::Label, true) == ".blue.black.brown");
    check!(render_one(rgb(), Style::Label, false) == ".R,100,G,200,B,150");
    check!(render_one(rgb(), Style::Label, true) == ".R=100.G=200.B=150");
}

#[test]
fn simple_style() {
    check!(render_one(Value::Absent, Style::Simple, false) == "");
    check!(render_one(Value::Absent, Style::Simple, true) == "");
    check!(render_one("blue".into(), Style::Simple, false) == "blue");
    check!(render_one("blue".into(), Style::Simple, true) == "blue");
    check!(render_one(colors(), Style::Simple, false) == "blue,black,brown");
    check!(render_one(colors(), Style::Simple, true) == "blue,black,brown");
    check!(render_one(rgb(), Style::Simple, false) == "R,100,G,200,B,150");
    check!(render_one(rgb(), Style::Simple, true) == "R=100,G=200,B=150");
}

#[test]
fn form_style() {
    check!(render_one(Value::Absent, Style::Form, false) == "color=");
    check!(render_one(Value::Absent, Style::Form, true) == "color=");
    check!(render_one("blue".into(), Style::Form, false) == "color=blue");
    check!(render_one("blue".into(), Style::Form, true) == "color=blue");
    check!(render_one(colors(), Style::Form, false) == "color=blue,black,brown");
    check!(render_one(colors(), Style::Form, true) == "color=blue&color=black&color=brown");
    check!(render_one(rgb(), Style::Form, false) == "color=R,100,G,200,B,150");
    check!(render_one(rgb(), Style::Form, true) == "R=100&G=200&B=150");
}

#[test]
fn form_style_empty_collections() {
    check!(render_one(Value::Sequence(vec![]), Style::Form, false) == "color=");
    check!(render_one(Value::Sequence(vec![]), Style::Form, true) == "color=");
    check!(render_one(Value::Mapping(vec![]), Style::Form, false) == "color=");
    check!(render_one(Value::Mapping(vec![]), Style::Form, true) == "color=");
}

#[test]
fn space_delimited_style() {
    check!(render_one(colors(), Style::SpaceDelimited, false) == "color=blue%20black%20brown");
    check!(render_one(rgb(), Style::SpaceDelimited, false) == "color=R%20100%20G%20200%20B%20150");
}

#[test]
fn pipe_delimited_style() {
    check!(render_one(colors(), Style::PipeDelimited, false) == "color=blue%7Cblack%7Cbrown");
    check!(render_one(rgb(), Style::PipeDelimited, false) == "color=R%7C100%7CG%7C200%7CB%7C150");
}

#[test]
fn deep_object_style() {
    check!(
        render_one(rgb(), Style::DeepObject, true)
            == "color%5BR%5D=100&color%5BG%5D=200&color%5BB%5D=150"
    );
}

#[test]
fn multiple_form_parameters_join_with_ampersand() {
    let mut params = QueryParams::new();
    params.push("color", "blue");
    params.push("size", "large");
    insta::assert_snapshot!(params.render(), @"color=blue&size=large");
}

#[test]
fn mixed_styles_concatenate_without_separator() {
    let mut params = QueryParams::new();
    params
        .append("id", "5", Style::Simple, true)
        .expect("valid combination");
    params
        .append("color", Value::sequence(["blue", "black"]), Style::Form, true)
        .expect("valid combination");
    insta::assert_snapshot!(params.render(), @"5color=blue&color=black");
}

#[test]
fn path_segment_styles_compose() {
    let mut params = QueryParams::new();
    params
        .append("version", "v2", Style::Matrix, false)
        .expect("valid combination");
    params
        .append("lang", Value::sequence(["en", "fr"]), Style::Label, false)
        .expect("valid combination");
    insta::assert_snapshot!(params.render(), @";version=v2.en,fr");
}

#[test]
fn render_on_fresh_collection_is_empty() {
    let params = QueryParams::new();
    check!(params.render() == "");
    check!(params.to_string() == "");
}

#[test]
fn repeated_names_serialize_independently() {
    let mut params = QueryParams::new();
    params.push("color", "blue");
    params.push("color", "black");
    check!(params.render() == "color=blue&color=black");
    check!(params.get("color") == Some(&Value::scalar("blue")));
    check!(params.get_all("color").len() == 2);
}
