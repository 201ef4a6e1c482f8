//! Favorite step definitions

use super::{names, ListingWorld};
use cucumber::{then, when};
use pokeline::ItemDetail;

#[when(regex = r#"^I toggle favorite "([^"]*)"$"#)]
async fn when_toggle_favorite(world: &mut ListingWorld, name: String) {
    let before = world.listing.is_favorite(&name);
    let after = world.listing.toggle_favorite(&name);
    assert_ne!(before, after);
}

#[when("I switch the favorites view")]
async fn when_switch_favorites_view(world: &mut ListingWorld) {
    world.listing.toggle_favorites_only();
}

#[then(regex = r#"^the favorites are "([^"]*)"$"#)]
async fn then_favorites_are(world: &mut ListingWorld, expected: String) {
    let expected = names(&expected);
    assert_eq!(world.listing.favorites().len(), expected.len());
    for name in &expected {
        assert!(world.listing.is_favorite(name), "{name} should be a favorite");
    }
}

#[then("the favorites are empty")]
async fn then_favorites_are_empty(world: &mut ListingWorld) {
    assert!(world.listing.favorites().is_empty());
}

#[then(regex = r#"^"([^"]*)" is labelled "([^"]*)"$"#)]
async fn then_item_is_labelled(world: &mut ListingWorld, name: String, label: String) {
    let is_favorite = world.listing.is_favorite(&name);
    assert_eq!(ItemDetail::favorite_label(is_favorite), label);
}

#[then(regex = r"^the favorites view is (on|off)$")]
async fn then_favorites_view_is(world: &mut ListingWorld, state: String) {
    assert_eq!(world.listing.favorites_only(), state == "on");
}
