//! Collection and detail loading step definitions

use super::{references_from, ListingWorld};
use cucumber::{gherkin, given, then, when};
use pokeline::{DetailPayload, DetailState, FetchError, LoadState};

#[given(regex = r"^a listing with page size (\d+)$")]
async fn given_listing_with_page_size(world: &mut ListingWorld, size: usize) {
    world.listing = pokeline::ListingViewModel::new(size, 100);
    world.issued.clear();
    world.detail_requests.clear();
}

#[given("the collection loads:")]
async fn given_collection_loads(world: &mut ListingWorld, step: &gherkin::Step) {
    collection_loads(world, step);
}

#[when("the collection loads:")]
async fn when_collection_loads(world: &mut ListingWorld, step: &gherkin::Step) {
    collection_loads(world, step);
}

/// Complete the fetch in flight, issuing one first when idle
fn collection_loads(world: &mut ListingWorld, step: &gherkin::Step) {
    let request = if world.listing.is_loading() {
        world.current_request()
    } else {
        world.listing.refresh(world.listing.page_size())
    };
    world.detail_requests = world
        .listing
        .apply_collection(request.tag, Ok(references_from(step)));
    assert_eq!(*world.listing.load_state(), LoadState::Loaded);
    world.issued.clear();
}

#[given(regex = r"^the next collection fetch fails with status (\d+)$")]
async fn given_next_fetch_fails(world: &mut ListingWorld, status: u16) {
    let request = world.listing.refresh(world.listing.page_size());
    let details = world.listing.apply_collection(
        request.tag,
        Err(FetchError::Status {
            status,
            url: "fake://pokemon".to_string(),
        }),
    );
    assert!(details.is_empty());
    world.issued.clear();
}

#[when("I request more")]
async fn when_request_more(world: &mut ListingWorld) {
    let before = world.listing.page_size();
    let request = world.listing.request_more();
    assert!(request.size() > before);
    world.issued.push(request);
}

#[when("I retry")]
async fn when_retry(world: &mut ListingWorld) {
    world.issued.clear();
    let request = world.listing.retry().expect("retry should issue a fetch");
    world.issued.push(request);
}

#[when("the response to the first of them arrives with:")]
async fn when_first_response_arrives(world: &mut ListingWorld, step: &gherkin::Step) {
    let first = *world.issued.first().expect("no fetch issued");
    let details = world
        .listing
        .apply_collection(first.tag, Ok(references_from(step)));
    assert!(details.is_empty());
}

#[when(regex = r#"^the detail for "([^"]*)" resolves with image "([^"]*)"$"#)]
async fn when_detail_resolves(world: &mut ListingWorld, name: String, image: String) {
    let id = world.item_named(&name).id();
    assert!(world
        .listing
        .apply_detail(id, Ok(DetailPayload::with_image(image))));
}

#[when(regex = r#"^the detail for "([^"]*)" fails$"#)]
async fn when_detail_fails(world: &mut ListingWorld, name: String) {
    let item = world.item_named(&name);
    let (id, url) = (item.id(), item.reference().detail_url.clone());
    assert!(world
        .listing
        .apply_detail(id, Err(FetchError::Status { status: 500, url })));
}

#[then(regex = r"^the page size is (\d+)$")]
async fn then_page_size_is(world: &mut ListingWorld, size: usize) {
    assert_eq!(world.listing.page_size(), size);
}

#[then(regex = r"^exactly one collection fetch for (\d+) was issued$")]
async fn then_one_fetch_issued(world: &mut ListingWorld, size: usize) {
    let sizes: Vec<usize> = world.issued.iter().map(|r| r.size()).collect();
    assert_eq!(sizes, vec![size]);
}

#[then(regex = r"^the listing is loading (\d+) entries$")]
async fn then_listing_is_loading(world: &mut ListingWorld, size: usize) {
    assert_eq!(world.current_request().size(), size);
}

#[then("the listing has failed")]
async fn then_listing_has_failed(world: &mut ListingWorld) {
    assert!(matches!(
        world.listing.load_state(),
        LoadState::Failed { .. }
    ));
}

#[then("the listing is not loading")]
async fn then_listing_is_not_loading(world: &mut ListingWorld) {
    assert!(!world.listing.is_loading());
}

#[then("every item is waiting for its sprite")]
async fn then_every_item_pending(world: &mut ListingWorld) {
    assert!(world.listing.items().iter().all(|item| item.is_pending()));
}

#[then(regex = r"^(\d+) detail fetches were issued$")]
async fn then_detail_fetches_issued(world: &mut ListingWorld, count: usize) {
    assert_eq!(world.detail_requests.len(), count);
    let ids: Vec<_> = world.listing.items().iter().map(|item| item.id()).collect();
    assert!(world
        .detail_requests
        .iter()
        .all(|request| ids.contains(&request.item_id)));
}

#[then(regex = r#"^"([^"]*)" shows "([^"]*)"$"#)]
async fn then_item_shows(world: &mut ListingWorld, name: String, image: String) {
    assert_eq!(world.item_named(&name).image_url(), Some(image.as_str()));
}

#[then(regex = r#"^"([^"]*)" is still loading its sprite$"#)]
async fn then_item_still_loading(world: &mut ListingWorld, name: String) {
    assert_eq!(*world.item_named(&name).state(), DetailState::Pending);
}

#[then(regex = r#"^"([^"]*)" has no sprite$"#)]
async fn then_item_has_no_sprite(world: &mut ListingWorld, name: String) {
    let item = world.item_named(&name);
    assert!(item.is_failed());
    assert_eq!(item.image_url(), None);
}
