//! Filter step definitions

use super::{names, ListingWorld};
use cucumber::{then, when};

#[when(regex = r#"^I filter by "([^"]*)"$"#)]
async fn when_filter_by(world: &mut ListingWorld, text: String) {
    world.listing.set_filter(&text);
}

#[then(regex = r#"^the filtered view shows "([^"]*)"$"#)]
async fn then_filtered_view_shows(world: &mut ListingWorld, expected: String) {
    let shown: Vec<String> = world
        .listing
        .filtered_view()
        .iter()
        .map(|reference| reference.name.clone())
        .collect();
    assert_eq!(shown, names(&expected));
}

#[then("the filtered view is empty")]
async fn then_filtered_view_is_empty(world: &mut ListingWorld) {
    assert!(world.listing.filtered_view().is_empty());
}

#[then(regex = r#"^the filter text is "([^"]*)"$"#)]
async fn then_filter_text_is(world: &mut ListingWorld, expected: String) {
    assert_eq!(world.listing.filter(), expected);
}

#[then(regex = r#"^the visible entries are "([^"]*)"$"#)]
async fn then_visible_entries_are(world: &mut ListingWorld, expected: String) {
    let visible: Vec<String> = world
        .listing
        .visible_items()
        .iter()
        .map(|item| item.name().to_string())
        .collect();
    assert_eq!(visible, names(&expected));
}
