//! Synthesized templates must render under the preview engine — the emitted
//! control/placeholder syntax and the renderer are a matched pair.

use rnarrate_gen::{extract_fields, resolve_title, synthesize};
use rnarrate_render::Renderer;
use serde_json::json;

fn scenario_a_template() -> String {
    let doc = json!([{
        "title": "Suspicious Login",
        "detection": {
            "selection": {"EventID": 1, "LogonType": 3},
            "condition": "selection"
        }
    }]);
    synthesize(&extract_fields(&doc), &resolve_title(&doc), "Acme")
}

#[test]
fn singular_branch_renders_first_entry_values() {
    let template = scenario_a_template();
    let data = json!({
        "logs": {"log": [{"EventID": 4624, "LogonType": 3}]}
    });

    let out = Renderer::new().render(&template, &data).unwrap();

    assert!(out.contains(
        "Acme has detected Suspicious Login. As part of the investigation, Acme observed the following activity:"
    ));
    assert!(out.contains("* **EventID:** `4624`"));
    assert!(out.contains("* **LogonType:** `3`"));
    assert!(!out.contains("multiple events"));
}

#[test]
fn plural_branch_iterates_every_entry() {
    let template = scenario_a_template();
    let data = json!({
        "logs": {"log": [
            {"EventID": 4624, "LogonType": 3},
            {"EventID": 4625, "LogonType": 10}
        ]}
    });

    let out = Renderer::new().render(&template, &data).unwrap();

    assert!(out.contains("Acme observed multiple events:"));
    assert!(out.contains("* **EventID:** `4624`"));
    assert!(out.contains("* **EventID:** `4625`"));
    assert!(out.contains("* **LogonType:** `10`"));
    assert!(!out.contains("following activity"));
}

#[test]
fn fallback_template_still_renders() {
    let doc = json!({"detection": {"condition": "sel"}});
    let template = synthesize(&extract_fields(&doc), &resolve_title(&doc), "Acme");
    let data = json!({
        "logs": {"log": [{"EventType": "SetValue", "TargetObject": "HKLM\\x"}]}
    });

    let out = Renderer::new().render(&template, &data).unwrap();
    assert!(out.contains("Acme has detected Untitled."));
    assert!(out.contains("* **EventType:** `SetValue`"));
}

#[test]
fn synthesized_template_always_validates() {
    let template = scenario_a_template();
    Renderer::new().validate(&template).unwrap();
}
