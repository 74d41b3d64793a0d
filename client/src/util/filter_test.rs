use super::*;
use crate::net::types::Category;

fn product(id: i64, category_id: Option<i64>) -> Product {
    Product {
        id,
        name: format!("p{id}"),
        description: None,
        price: 1.0,
        image_url: None,
        category_id,
        in_stock: true,
        created_at: None,
        category: None,
    }
}

#[test]
fn category_href_builds_query_or_root() {
    assert_eq!(category_href(Some(3)), "/?category_id=3");
    assert_eq!(category_href(None), "/");
}

#[test]
fn parse_category_param_accepts_integers_only() {
    assert_eq!(parse_category_param(Some("7")), Some(7));
    assert_eq!(parse_category_param(Some(" 7 ")), Some(7));
    assert_eq!(parse_category_param(Some("")), None);
    assert_eq!(parse_category_param(Some("abc")), None);
    assert_eq!(parse_category_param(None), None);
}

#[test]
fn card_category_attr_prefers_foreign_key() {
    assert_eq!(card_category_attr(&product(1, Some(4))), "4");
    assert_eq!(card_category_attr(&product(1, None)), "");
}

#[test]
fn card_category_attr_falls_back_to_embedded_category() {
    let mut p = product(1, None);
    p.category = Some(Category { id: 9, name: "Garden".into(), description: None, created_at: None });
    assert_eq!(card_category_attr(&p), "9");
}

#[test]
fn filter_hides_exactly_the_mismatched_cards() {
    let cards: Vec<String> = [Some(1), Some(2), None, Some(1)]
        .into_iter()
        .enumerate()
        .map(|(i, c)| card_category_attr(&product(i as i64, c)))
        .collect();
    let visible: Vec<bool> = cards.iter().map(|c| card_visible(c, "1")).collect();
    assert_eq!(visible, vec![true, false, false, true]);
}

#[test]
fn cleared_selection_shows_every_card() {
    for card in ["1", "2", ""] {
        assert!(card_visible(card, ""));
    }
}
