use devmatch_core::project::Project;
use devmatch_core::text::{tokenize, Term};
use devmatch_core::types::{
    RankedProject, Recommendation, RecommendationMetadata, RecommendationWhy, TermWeight,
};
use serde_json::Value;

// These tests construct the output types by hand so the snapshot exercises
// only the serialization contract, not the scoring logic. Weights are picked
// to print exactly.

fn term(s: &str) -> Term {
    tokenize(s).remove(0)
}

#[test]
fn golden_recommendation_serialization() {
    let project = Project::new(
        "42",
        "React Router",
        "routing for react",
        ["javascript", "react"],
    );

    let why = RecommendationWhy {
        matched_terms: vec![
            TermWeight {
                term: term("javascript"),
                weight: 0.25,
            },
            TermWeight {
                term: term("react"),
                weight: 0.75,
            },
        ],
        project_term_count: 7,
    };

    let metadata = RecommendationMetadata {
        skills: vec!["react".to_string(), "javascript".to_string()],
        skill_terms: tokenize("react javascript"),
        limit: 5,
        corpus_size: 3,
        projects_considered: 2,
        projects_returned: 1,
    };

    let result = Recommendation {
        projects: vec![RankedProject {
            project: &project,
            score: 1.0,
            why,
        }],
        metadata,
    };

    let json_str = serde_json::to_string_pretty(&result).unwrap();

    // Key order is definition order under default serde. The serving layer
    // relies on projects before metadata, and project, score, why inside
    // each entry.
    let projects_pos = json_str.find("\"projects\":").unwrap();
    let metadata_pos = json_str.find("\"metadata\":").unwrap();
    assert!(projects_pos < metadata_pos);

    let project_pos = json_str.find("\"project\":").unwrap();
    let score_pos = json_str.find("\"score\":").unwrap();
    let why_pos = json_str.find("\"why\":").unwrap();
    assert!(project_pos < score_pos);
    assert!(score_pos < why_pos);

    const EXPECTED_JSON: &str = r#"{
      "projects": [
        {
          "project": {
            "id": "42",
            "name": "React Router",
            "description": "routing for react",
            "tags": [
              "javascript",
              "react"
            ]
          },
          "score": 1.0,
          "why": {
            "matched_terms": [
              {
                "term": "javascript",
                "weight": 0.25
              },
              {
                "term": "react",
                "weight": 0.75
              }
            ],
            "project_term_count": 7
          }
        }
      ],
      "metadata": {
        "skills": [
          "react",
          "javascript"
        ],
        "skill_terms": [
          "react",
          "javascript"
        ],
        "limit": 5,
        "corpus_size": 3,
        "projects_considered": 2,
        "projects_returned": 1
      }
    }"#;

    // Normalize strings for comparison (remove all whitespace)
    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = EXPECTED_JSON
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    assert_eq!(
        normalized_actual, normalized_expected,
        "JSON mismatch against golden snapshot"
    );

    let parsed: Value = serde_json::from_str(&json_str).unwrap();
    assert_eq!(parsed["projects"][0]["project"]["id"], "42");
    assert_eq!(parsed["projects"][0]["score"], 1.0);
    assert_eq!(parsed["metadata"]["corpus_size"], 3);
}

#[test]
fn metadata_roundtrips_through_json() {
    let metadata = RecommendationMetadata {
        skills: vec!["rust".to_string()],
        skill_terms: tokenize("rust"),
        limit: 3,
        corpus_size: 6,
        projects_considered: 5,
        projects_returned: 3,
    };

    let json_str = serde_json::to_string(&metadata).unwrap();
    let back: RecommendationMetadata = serde_json::from_str(&json_str).unwrap();
    let json_again = serde_json::to_string(&back).unwrap();

    assert_eq!(json_str, json_again);
    assert_eq!(back.skills, vec!["rust".to_string()]);
    assert_eq!(back.limit, 3);
    assert_eq!(back.corpus_size, 6);
}

#[test]
fn project_deserialization_defaults_optional_fields() {
    let bare: Project = serde_json::from_str(r#"{"id":"7","name":"Bare"}"#).unwrap();

    assert_eq!(bare.id.as_str(), "7");
    assert_eq!(bare.name, "Bare");
    assert_eq!(bare.description, "");
    assert!(bare.tags.is_empty());

    let tokens = tokenize(&bare.search_text());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].as_str(), "bare");
}

#[test]
fn project_field_order_is_stable() {
    let project = Project::new("9", "Tokio", "async runtime", ["rust", "async"]);
    let json_str = serde_json::to_string(&project).unwrap();

    let id_pos = json_str.find("\"id\":").unwrap();
    let name_pos = json_str.find("\"name\":").unwrap();
    let desc_pos = json_str.find("\"description\":").unwrap();
    let tags_pos = json_str.find("\"tags\":").unwrap();

    assert!(id_pos < name_pos);
    assert!(name_pos < desc_pos);
    assert!(desc_pos < tags_pos);

    let back: Project = serde_json::from_str(&json_str).unwrap();
    assert_eq!(back, project);
}
