use std::{cell::RefCell, rc::Rc, time::Instant};

use query_sync::{QuerySync, StoreHandle, SyncConfig, UrlQueryStore};
use query_sync_test::{mirror, TestHost, TestState};

#[test]
fn shareable_url_follows_host_state() {
    let _ = env_logger::builder().is_test(true).try_init();
    let url = UrlQueryStore::parse("https://shop.example/search?q=boots&utm_campaign=spring")
        .expect("valid url");
    let store = Rc::new(RefCell::new(url));
    let sync = QuerySync::builder()
        .store(StoreHandle::shared(store.clone()))
        .build()
        .unwrap();

    let mut decl = SyncConfig::<TestState>::builder();
    decl.passthrough_query(true);
    mirror(&mut decl, "q");
    mirror(&mut decl, "page");

    let now = Instant::now();
    let mut host =
        TestHost::mounted(&sync, TestState::with_fields(&["q", "page"]), Some(&decl), now).unwrap();
    assert_eq!(host.state.get("q"), Some("boots"));

    host.state.set("q", "rain boots");
    host.state.set("page", "2");
    host.tick(now).unwrap();

    assert_eq!(
        store.borrow().href(),
        "https://shop.example/search?page=2&q=rain+boots&utm_campaign=spring"
    );

    store.borrow_mut().navigate("/search?q=sandals").unwrap();
    host.tick(now).unwrap();
    assert_eq!(host.state.get("q"), Some("sandals"));
    assert_eq!(host.state.get("page"), Some(""));
}
