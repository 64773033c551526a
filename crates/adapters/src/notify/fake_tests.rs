// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn fake_notifier_records_calls() {
    let fake = FakeNotifier::new("fake");

    fake.deliver(&Event::new("e1")).await.unwrap();
    fake.deliver(&Event::new("e2")).await.unwrap();

    assert_eq!(fake.delivered_ids(), vec!["e1", "e2"]);
    assert_eq!(fake.name(), "fake");
}

#[tokio::test]
async fn failing_fake_records_then_errors() {
    let fake = FakeNotifier::failing("fake");

    let result = fake.deliver(&Event::new("e1")).await;

    assert!(matches!(result, Err(DeliveryError::Transport(_))));
    assert_eq!(fake.calls().len(), 1);

    fake.set_failing(false);
    assert!(fake.deliver(&Event::new("e2")).await.is_ok());
}
