//! Browser-side tests for the `SemanticSphere` facade.
//!
//! Run with `wasm-pack test --headless --firefox rust/semsphere`.

#![cfg(target_arch = "wasm32")]

use semsphere::{PlotResult, SemanticSphere, SphereConfig};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Deserialize)]
struct ErrorPayload {
    error: String,
    words: Option<Vec<String>>,
}

fn sphere() -> SemanticSphere {
    SemanticSphere::new(JsValue::UNDEFINED).unwrap()
}

#[wasm_bindgen_test]
fn plot_round_trips_through_js() {
    let mut sphere = sphere();
    assert!(sphere.add_sentence("The stone became sand").unwrap());

    let result: PlotResult = serde_wasm_bindgen::from_value(sphere.plot().unwrap()).unwrap();
    assert_eq!(result.paths[0].words, vec!["stone", "sand"]);
    assert_eq!(result.words.len(), 2);
}

#[wasm_bindgen_test]
fn unmapped_words_reach_js_as_a_list() {
    let mut sphere = sphere();
    let err = sphere.add_sentence("The zebra became sand").unwrap_err();
    let payload: ErrorPayload = serde_wasm_bindgen::from_value(err).unwrap();

    assert_eq!(payload.error, "unmapped_words");
    assert_eq!(payload.words, Some(vec!["zebra".to_string()]));
    assert!(sphere.sentences().is_empty());
    assert_eq!(sphere.validate("a quasar of sand"), vec!["quasar".to_string()]);
}

#[wasm_bindgen_test]
fn config_object_is_honored() {
    let config = serde_wasm_bindgen::to_value(&SphereConfig::strict()).unwrap();
    let sphere = SemanticSphere::new(config).unwrap();

    #[derive(Deserialize)]
    struct Classified {
        level: u8,
    }
    let carbon: Classified = serde_wasm_bindgen::from_value(sphere.classify("carbon").unwrap()).unwrap();
    assert_eq!(carbon.level, 3);
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    let config = SphereConfig {
        quantize_decimals: 12,
        ..SphereConfig::default()
    };
    let config = serde_wasm_bindgen::to_value(&config).unwrap();
    assert!(SemanticSphere::new(config).is_err());
}

#[wasm_bindgen_test]
fn axis_views_default_to_all_triples() {
    let mut sphere = sphere();
    sphere.add_words(vec!["atom".into(), "star".into()]).unwrap();

    let views: Vec<serde_json::Value> =
        serde_wasm_bindgen::from_value(sphere.plot_axis_views(JsValue::NULL).unwrap()).unwrap();
    assert_eq!(views.len(), 20);

    let triples = serde_wasm_bindgen::to_value(&[["Scale", "Social", "Sensory"]]).unwrap();
    let views: Vec<serde_json::Value> =
        serde_wasm_bindgen::from_value(sphere.plot_axis_views(triples).unwrap()).unwrap();
    assert_eq!(views.len(), 1);
}

#[wasm_bindgen_test]
fn guides_and_vocabulary_are_exported() {
    let sphere = sphere();
    let guides: serde_json::Value = serde_wasm_bindgen::from_value(sphere.guides().unwrap()).unwrap();
    assert_eq!(guides["shells"].as_array().map(|a| a.len()), Some(5));
    assert_eq!(guides["spokes"].as_array().map(|a| a.len()), Some(6));

    let groups: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(sphere.vocabulary().unwrap()).unwrap();
    assert!(!groups.is_empty());
}
