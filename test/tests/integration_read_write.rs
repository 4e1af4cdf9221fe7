use std::time::Instant;

use query_sync::{QueryStore, SyncConfig};
use query_sync_test::{mirror, query, Fixture, TestHost, TestState};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn round_trip_through_the_store() {
    init_logging();
    let fixture = Fixture::new(query(&[]));
    let mut decl = SyncConfig::builder();
    mirror(&mut decl, "v");

    let now = Instant::now();
    let mut writer =
        TestHost::mounted(&fixture.sync, TestState::with_fields(&["v"]), Some(&decl), now).unwrap();
    writer.state.set("v", "hello");
    writer.tick(now).unwrap();
    assert_eq!(fixture.current(), query(&[("v", "hello")]));

    let reader = TestHost::create(&fixture.sync, TestState::with_fields(&["v"]), Some(&decl)).unwrap();
    assert_eq!(reader.state.get("v"), Some("hello"));
}

#[test]
fn reading_twice_leaves_state_unchanged() {
    init_logging();
    let fixture = Fixture::new(query(&[("a", "1"), ("b", "two")]));
    let mut decl = SyncConfig::builder();
    mirror(&mut decl, "a");
    mirror(&mut decl, "b");

    let now = Instant::now();
    let mut host =
        TestHost::mounted(&fixture.sync, TestState::with_fields(&["a", "b"]), Some(&decl), now)
            .unwrap();
    host.tick(now).unwrap();
    let commits = fixture.commit_count();

    host.read_query().unwrap();
    host.read_query().unwrap();
    host.tick(now).unwrap();

    assert_eq!(host.state.get("a"), Some("1"));
    assert_eq!(host.state.get("b"), Some("two"));
    // nothing changed, so nothing was scheduled
    assert_eq!(fixture.commit_count(), commits);
    assert!(!host.engine().has_pending_write());
}

#[test]
fn host_without_config_never_touches_the_store() {
    init_logging();
    let fixture = Fixture::new(query(&[("a", "1")]));
    let now = Instant::now();

    let mut host =
        TestHost::mounted(&fixture.sync, TestState::with_fields(&["a"]), None, now).unwrap();
    host.state.set("a", "changed");
    host.read_query().unwrap();
    host.write_query(now);
    host.tick(now).unwrap();
    fixture.load(query(&[("a", "external")]));
    host.tick(now).unwrap();

    assert_eq!(host.state.get("a"), Some("changed"));
    assert_eq!(fixture.commit_count(), 0);
    assert!(host.query_params().unwrap().is_empty());
    assert!(!host.engine().is_synced());
    host.teardown().unwrap();
}

#[test]
fn read_only_param_is_never_written() {
    init_logging();
    let fixture = Fixture::new(query(&[("x", "from-url")]));
    let mut decl = SyncConfig::<TestState>::builder();
    decl.read("x", |host, q| {
        host.set("x", q.get("x").map(String::as_str).unwrap_or(""));
        Ok(())
    });

    let now = Instant::now();
    let mut host =
        TestHost::mounted(&fixture.sync, TestState::with_fields(&["x"]), Some(&decl), now).unwrap();
    assert_eq!(host.state.get("x"), Some("from-url"));

    host.tick(now).unwrap();
    // the normalizing write only carries what write codecs produce
    assert_eq!(fixture.store.borrow().last_commit(), Some(&query(&[])));
    assert!(host.query_params().unwrap().is_empty());
}

#[test]
fn codecs_run_in_declaration_order() {
    init_logging();
    let fixture = Fixture::new(query(&[]));
    let mut decl = SyncConfig::<TestState>::builder();
    for name in ["zeta", "alpha", "mid"] {
        decl.read(name, move |host, _| {
            host.hook_log.push(format!("read {}", name));
            Ok(())
        })
        .write(name, move |_, q| {
            // each codec sees what the previous ones wrote
            let order = q.get("order").cloned().unwrap_or_default();
            q.insert("order".to_string(), format!("{}{}/", order, name));
            Ok(())
        });
    }

    let now = Instant::now();
    let mut host = TestHost::mounted(&fixture.sync, TestState::default(), Some(&decl), now).unwrap();
    assert_eq!(host.state.hook_log, vec!["read zeta", "read alpha", "read mid"]);

    host.tick(now).unwrap();
    assert_eq!(fixture.current(), query(&[("order", "zeta/alpha/mid/")]));
}

#[test]
fn query_params_match_the_next_commit() {
    init_logging();
    let fixture = Fixture::new(query(&[]));
    let mut decl = SyncConfig::builder();
    mirror(&mut decl, "q");
    mirror(&mut decl, "page");

    let now = Instant::now();
    let mut host =
        TestHost::mounted(&fixture.sync, TestState::with_fields(&["q", "page"]), Some(&decl), now)
            .unwrap();
    host.state.set("q", "boots");
    host.state.set("page", "3");

    let params = host.query_params().unwrap();
    assert_eq!(params, query(&[("q", "boots"), ("page", "3")]));
    // computing the view is side-effect free
    assert_eq!(fixture.commit_count(), 0);

    host.tick(now).unwrap();
    assert_eq!(fixture.store.borrow().last_commit(), Some(&params));
}

#[test]
fn hooks_wrap_each_pass() {
    init_logging();
    let fixture = Fixture::new(query(&[("a", "1")]));
    let mut decl = SyncConfig::<TestState>::builder();
    mirror(&mut decl, "a");
    for (kind, label) in [
        (query_sync::HookKind::BeforeInit, "before_init"),
        (query_sync::HookKind::BeforeRead, "before_read"),
        (query_sync::HookKind::AfterRead, "after_read"),
        (query_sync::HookKind::BeforeWrite, "before_write"),
        (query_sync::HookKind::AfterWrite, "after_write"),
    ] {
        decl.hook(kind, move |host| {
            host.hook_log.push(label.to_string());
            Ok(())
        });
    }

    let now = Instant::now();
    let mut host =
        TestHost::mounted(&fixture.sync, TestState::with_fields(&["a"]), Some(&decl), now).unwrap();
    host.state.set("a", "2");
    host.tick(now).unwrap();

    assert_eq!(
        host.state.hook_log,
        vec!["before_init", "before_read", "after_read", "before_write", "after_write"]
    );
    assert_eq!(fixture.store.borrow().current(), &query(&[("a", "2")]));
}
