//! List & Pagination Controller behavior against a mock backend.

mod common;

use admin_core::{CollectionClient, ListController};
use common::{MockItemsApi, MockUsersApi};
use futures::executor::block_on;
use shared_types::Item;

#[test]
fn twelve_items_with_limit_five_report_three_pages() {
    let api = MockItemsApi::with_items(12);
    let mut list = ListController::<Item>::new(true, 5);

    block_on(list.load_page(&api, 1)).unwrap();

    assert_eq!(list.records().len(), 5);
    assert_eq!(list.total_pages(), 3);
    assert!(!list.can_retreat());
    assert!(list.can_advance());
    assert_eq!(list.page_label(), "Page 1 of 3");
}

#[test]
fn retreat_at_first_page_is_a_noop() {
    let api = MockItemsApi::with_items(12);
    let mut list = ListController::<Item>::new(true, 5);
    block_on(list.load_page(&api, 1)).unwrap();

    block_on(list.retreat(&api)).unwrap();

    assert_eq!(list.page(), 1);
    assert_eq!(api.fetch_calls.get(), 1);
}

#[test]
fn advance_at_last_page_is_a_noop() {
    let api = MockItemsApi::with_items(12);
    let mut list = ListController::<Item>::new(true, 5);
    block_on(list.load_page(&api, 1)).unwrap();
    block_on(list.advance(&api)).unwrap();
    block_on(list.advance(&api)).unwrap();
    assert_eq!(list.page(), 3);
    assert_eq!(list.records().len(), 2);

    block_on(list.advance(&api)).unwrap();

    assert_eq!(list.page(), 3);
    assert_eq!(api.fetch_calls.get(), 3);
}

#[test]
fn fetch_failure_leaves_the_previous_page_untouched() {
    let api = MockItemsApi::with_items(12);
    let mut list = ListController::<Item>::new(true, 5);
    block_on(list.load_page(&api, 1)).unwrap();
    let before = list.clone();

    api.fail_fetch.set(true);
    assert!(block_on(list.advance(&api)).is_err());

    assert_eq!(list, before);
}

#[test]
fn load_page_is_idempotent_without_mutations() {
    let api = MockItemsApi::with_items(12);
    let mut list = ListController::<Item>::new(true, 5);

    block_on(list.load_page(&api, 2)).unwrap();
    let first = list.records().to_vec();
    block_on(list.load_page(&api, 2)).unwrap();

    assert_eq!(list.records(), first.as_slice());
    assert_eq!(list.page(), 2);
}

#[test]
fn unpaginated_mode_loads_everything_with_no_page_arithmetic() {
    let api = MockUsersApi::with_users(7);
    let mut list = ListController::new(false, 5);

    block_on(list.load_page(&api, 1)).unwrap();

    assert_eq!(list.records().len(), 7);
    assert_eq!(list.total_pages(), 1);
    assert!(!list.can_advance());
    assert!(!list.can_retreat());
    assert_eq!(list.page_label(), "Page 1 of 1");
}

#[test]
fn refresh_after_deleting_the_whole_last_page_falls_back() {
    let api = MockItemsApi::with_items(6);
    let mut list = ListController::<Item>::new(true, 5);
    block_on(list.load_page(&api, 1)).unwrap();
    block_on(list.advance(&api)).unwrap();
    assert_eq!(list.page(), 2);
    assert_eq!(list.records().len(), 1);

    block_on(api.delete("item-6")).unwrap();
    block_on(list.refresh(&api)).unwrap();

    assert_eq!(list.page(), 1);
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.records().len(), 5);
}

#[test]
fn empty_collection_still_shows_page_one_of_one() {
    let api = MockItemsApi::with_items(0);
    let mut list = ListController::<Item>::new(true, 5);

    block_on(list.load_page(&api, 1)).unwrap();

    assert!(list.records().is_empty());
    assert_eq!(list.total_pages(), 0);
    assert_eq!(list.page_label(), "Page 1 of 1");
    assert!(!list.can_advance());
    assert!(!list.can_retreat());
}
