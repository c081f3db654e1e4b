use magbridge::{json_to_bilingual_html, merge_json, ArticleError, Language, MergeOptions, RenderOptions};
use serde_json::{json, Value};

const ARTICLE_EN: &str = include_str!("fixtures/article_en.json");
const ARTICLE_KO: &str = include_str!("fixtures/article_ko.json");

fn load(source: &str) -> Value {
    serde_json::from_str(source).expect("fixture should be valid JSON")
}

fn merge(english: &Value, korean: &Value, options: &MergeOptions) -> Result<Value, ArticleError> {
    let merged = merge_json(&english.to_string(), &korean.to_string(), options)?;
    Ok(serde_json::from_str(&merged.json).expect("merged output should be valid JSON"))
}

#[test]
fn test_merge_pairs_sections() {
    println!("=== Merge Sections ===");

    let merged = merge_json(ARTICLE_EN, ARTICLE_KO, &MergeOptions::default())
        .expect("Failed to merge documents");
    println!("Merged JSON:\n{}\n", merged.json);

    assert_eq!(merged.section_count, 3);

    let value: Value = serde_json::from_str(&merged.json).unwrap();
    let sections = value["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);

    let english = load(ARTICLE_EN);
    let korean = load(ARTICLE_KO);
    for (idx, section) in sections.iter().enumerate() {
        assert_eq!(section["title"]["en"], english["sections"][idx]["title"]);
        assert_eq!(section["title"]["ko"], korean["sections"][idx]["title"]);
        assert_eq!(section["number"], english["sections"][idx]["number"]);
        assert_eq!(section["layout"], english["sections"][idx]["layout"]);
    }
    println!("✓ Sections paired by position\n");
}

#[test]
fn test_merge_output_format() {
    let merged = merge_json(ARTICLE_EN, ARTICLE_KO, &MergeOptions::default())
        .expect("Failed to merge documents");

    assert!(merged.json.starts_with("{\n  \"metadata\": {\n    \"title\": {\n      \"en\": \"The Art of Slow Code\",\n      \"ko\": \"느린 코드의 미학\"\n    },"));
    assert!(!merged.json.contains("\\u"), "Non-ASCII text should be written literally");
    assert!(merged.json.ends_with("}\n"));
}

#[test]
fn test_structural_fields_come_from_english() {
    let english = load(ARTICLE_EN);
    let mut korean = load(ARTICLE_KO);
    korean["metadata"]["date"] = json!("2099-12-31");
    korean["hero"]["guest"]["name"] = json!("제인 도");
    korean["statistics"]["items"][0]["value"] = json!("99");
    korean["highlights"][0]["position"] = json!("after_section_3");

    let merged = merge(&english, &korean, &MergeOptions::default()).expect("Failed to merge");

    assert_eq!(merged["metadata"]["date"], "2024-05-01");
    assert_eq!(merged["hero"]["guest"]["name"], "Jane Doe");
    assert_eq!(merged["statistics"]["items"][0]["value"], "15");
    assert_eq!(merged["statistics"]["items"][1]["value"], 3);
    assert_eq!(merged["highlights"][0]["position"], "after_section_2");
    assert_eq!(
        merged["statistics"]["items"][1]["label"],
        json!({"en": "Open source projects", "ko": "오픈소스 프로젝트"})
    );
}

#[test]
fn test_knowledge_terms_both_come_from_english() {
    let english = load(ARTICLE_EN);
    let mut korean = load(ARTICLE_KO);
    korean["sections"][0]["knowledge_items"][0]["term_ko"] = json!("소유 규칙");
    korean["sections"][0]["knowledge_items"][0]["term_en"] = json!("Ownership rules");

    let merged = merge(&english, &korean, &MergeOptions::default()).expect("Failed to merge");
    let item = &merged["sections"][0]["knowledge_items"][0];

    assert_eq!(item["term_ko"], "소유권", "term_ko is taken from the English document");
    assert_eq!(item["term_en"], "Ownership");
    assert_eq!(
        item["description"],
        json!({"en": "Every value has exactly one owner.", "ko": "값마다 단 하나의 소유자가 있다는 규칙."})
    );
}

#[test]
fn test_opening_insight_merge() {
    let merged = merge(&load(ARTICLE_EN), &load(ARTICLE_KO), &MergeOptions::default())
        .expect("Failed to merge");

    let insight = &merged["opening_insight"];
    assert_eq!(insight["text"], "Make it work, then make it fast.");
    assert_eq!(insight["translation"], "먼저 동작하게, 그다음 빠르게.");
    assert_eq!(insight["original_link"], "https://example.com/talk");
    assert!(insight.get("enabled").is_none());
}

#[test]
fn test_optional_groups_follow_english() {
    let mut english = load(ARTICLE_EN);
    let mut korean = load(ARTICLE_KO);
    english["bonus_section"]["enabled"] = json!(false);
    korean.as_object_mut().unwrap().remove("bonus_section");
    english.as_object_mut().unwrap().remove("interview_context");

    let merged = merge(&english, &korean, &MergeOptions::default()).expect("Failed to merge");

    assert!(merged.get("bonus_section").is_none());
    assert!(merged.get("interview_context").is_none());
    assert!(merged.get("statistics").is_some());
}

#[test]
fn test_missing_korean_group_fails() {
    let english = load(ARTICLE_EN);
    let mut korean = load(ARTICLE_KO);
    korean.as_object_mut().unwrap().remove("statistics");

    match merge(&english, &korean, &MergeOptions::default()) {
        Err(ArticleError::MissingGroup { group, side }) => {
            assert_eq!(group, "statistics");
            assert_eq!(side, Language::Ko);
        }
        other => panic!("Expected MissingGroup, got {:?}", other),
    }
}

#[test]
fn test_missing_korean_follow_up_fails() {
    let english = load(ARTICLE_EN);
    let mut korean = load(ARTICLE_KO);
    korean["sections"][1]
        .as_object_mut()
        .unwrap()
        .remove("follow_up_answer");

    let result = merge(&english, &korean, &MergeOptions::default());
    assert!(matches!(
        result,
        Err(ArticleError::MissingGroup { group: "follow_up_answer", .. })
    ));
}

#[test]
fn test_missing_korean_optional_fields_fail() {
    let cases = [
        ("/hero", "image_alt", "hero.image_alt"),
        ("/hero", "category", "hero.category"),
        ("/highlights/0", "author", "highlights.author"),
        ("/footer", "credits", "footer.credits"),
    ];

    for (parent, key, expected) in cases {
        println!("Korean document without {}/{}", parent, key);
        let english = load(ARTICLE_EN);
        let mut korean = load(ARTICLE_KO);
        korean
            .pointer_mut(parent)
            .and_then(Value::as_object_mut)
            .expect("fixture should contain the parent object")
            .remove(key);

        match merge(&english, &korean, &MergeOptions::default()) {
            Err(ArticleError::MissingGroup { group, side }) => {
                assert_eq!(group, expected);
                assert_eq!(side, Language::Ko);
            }
            other => panic!("Expected MissingGroup for {}, got {:?}", expected, other),
        }
    }
    println!("✓ English text never stands in for a missing Korean field\n");
}

#[test]
fn test_optional_fields_absent_in_english_are_dropped() {
    let mut english = load(ARTICLE_EN);
    let korean = load(ARTICLE_KO);
    english["hero"].as_object_mut().unwrap().remove("category");
    english["footer"].as_object_mut().unwrap().remove("credits");

    let merged = merge(&english, &korean, &MergeOptions::default()).expect("Failed to merge");

    assert!(merged["hero"].get("category").is_none());
    assert!(merged["footer"].get("credits").is_none());
    assert_eq!(
        merged["hero"]["image_alt"],
        json!({"en": "The interviewee in her workshop", "ko": "작업실의 인터뷰이"})
    );
    assert_eq!(merged["highlights"][0]["author"], json!({"en": "Jane Doe", "ko": "Jane Doe"}));
}

#[test]
fn test_string_section_number_survives_merge() {
    let mut english = load(ARTICLE_EN);
    let korean = load(ARTICLE_KO);
    english["sections"][0]["number"] = json!("01");

    let merged = merge(&english, &korean, &MergeOptions::default()).expect("Failed to merge");
    assert_eq!(merged["sections"][0]["number"], json!("01"));
}

#[test]
fn test_section_count_mismatch_is_an_error() {
    let english = load(ARTICLE_EN);
    let mut korean = load(ARTICLE_KO);
    korean["sections"].as_array_mut().unwrap().pop();

    match merge(&english, &korean, &MergeOptions::default()) {
        Err(ArticleError::LengthMismatch { what, english, korean }) => {
            assert_eq!(what, "sections");
            assert_eq!((english, korean), (3, 2));
        }
        other => panic!("Expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_truncate_drops_excess_items() {
    let english = load(ARTICLE_EN);
    let mut korean = load(ARTICLE_KO);
    korean["sections"].as_array_mut().unwrap().pop();
    korean["sections"][0]["knowledge_items"] = json!([]);

    let options = MergeOptions { truncate: true };
    let merged = merge(&english, &korean, &options).expect("Truncating merge should succeed");

    assert_eq!(merged["sections"].as_array().unwrap().len(), 2);
    assert_eq!(merged["sections"][0]["knowledge_items"], json!([]));
}

#[test]
fn test_knowledge_item_count_mismatch_is_an_error() {
    let english = load(ARTICLE_EN);
    let mut korean = load(ARTICLE_KO);
    korean["sections"][2]["knowledge_items"].as_array_mut().unwrap().pop();

    let result = merge(&english, &korean, &MergeOptions::default());
    assert!(matches!(
        result,
        Err(ArticleError::LengthMismatch { what: "knowledge_items", english: 2, korean: 1 })
    ));
}

#[test]
fn test_merged_document_feeds_bilingual_converter() {
    let merged = merge_json(ARTICLE_EN, ARTICLE_KO, &MergeOptions::default())
        .expect("Failed to merge documents");

    let html = json_to_bilingual_html(&merged.json, &RenderOptions::default())
        .expect("Merged document should convert");

    assert!(html.contains("data-en=\"Beginnings\" data-ko=\"시작\">시작</span>"));
    assert!(html.contains("data-en=\"Make it work, then make it fast.\" data-ko=\"먼저 동작하게, 그다음 빠르게.\""));
}

#[test]
fn test_invalid_korean_json() {
    let result = merge_json(ARTICLE_EN, "not json", &MergeOptions::default());
    assert!(matches!(result, Err(ArticleError::InvalidJson { .. })));
}
