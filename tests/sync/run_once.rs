use std::sync::Arc;
use std::time::Duration;

use hotel_api::sync::{SyncJob, SyncReport};
use tokio::sync::oneshot;

use crate::common::mocks::partner_client::{partner_hotel, partner_review};
use crate::common::mocks::{MockHotelRepo, MockPartnerClient, MockReviewRepo};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|id| id.to_string()).collect()
}

#[tokio::test]
async fn run_once_upserts_hotels_and_reviews() {
    let client = Arc::new(
        MockPartnerClient::default()
            .with_hotel(
                partner_hotel(10, "River House"),
                vec![
                    partner_review("Ana", "Great view"),
                    partner_review("Ben", "Quiet nights"),
                ],
            )
            .with_hotel(partner_hotel(11, "Old Mill"), vec![]),
    );
    let hotels = Arc::new(MockHotelRepo::default());
    let reviews = Arc::new(MockReviewRepo::default());
    let job = SyncJob::new(ids(&["10", "11"]), client.clone(), hotels.clone(), reviews.clone());

    let report = job.run_once().await;

    assert_eq!(
        report,
        SyncReport {
            hotels_synced: 2,
            hotels_failed: 0,
            reviews_upserted: 2,
            reviews_failed: 0,
        }
    );
    assert_eq!(client.requested(), ids(&["10", "11"]));

    let stored = hotels.hotels.lock().expect("hotels mutex poisoned").clone();
    let names: Vec<&str> = stored.iter().map(|h| h.hotel_name.as_str()).collect();
    assert_eq!(names, vec!["River House", "Old Mill"]);
    assert_eq!(stored[0].address.city, "Porto");

    let stored_reviews = reviews.stored();
    assert_eq!(stored_reviews.len(), 2);
    assert!(stored_reviews.iter().all(|r| r.hotel_id == 10));
    assert_eq!(stored_reviews[0].kind, "family");
}

#[tokio::test]
async fn second_pass_updates_instead_of_duplicating() {
    let client = Arc::new(MockPartnerClient::default().with_hotel(
        partner_hotel(10, "River House"),
        vec![partner_review("Ana", "Great view")],
    ));
    let hotels = Arc::new(MockHotelRepo::default());
    let reviews = Arc::new(MockReviewRepo::default());
    let job = SyncJob::new(ids(&["10"]), client, hotels.clone(), reviews.clone());

    job.run_once().await;
    job.run_once().await;

    assert_eq!(hotels.hotels.lock().expect("hotels mutex poisoned").len(), 1);
    assert_eq!(reviews.stored().len(), 1);
}

#[tokio::test]
async fn unknown_hotel_is_counted_and_does_not_stop_the_pass() {
    let client = Arc::new(
        MockPartnerClient::default().with_hotel(partner_hotel(10, "River House"), vec![]),
    );
    let hotels = Arc::new(MockHotelRepo::default());
    let job = SyncJob::new(
        ids(&["404", "10"]),
        client.clone(),
        hotels.clone(),
        Arc::new(MockReviewRepo::default()),
    );

    let report = job.run_once().await;

    assert_eq!(report.hotels_failed, 1);
    assert_eq!(report.hotels_synced, 1);
    assert_eq!(client.requested(), ids(&["404", "10"]));
    assert_eq!(hotels.hotels.lock().expect("hotels mutex poisoned").len(), 1);
}

#[tokio::test]
async fn invalid_hotel_payload_is_skipped() {
    let mut invalid = partner_hotel(12, "");
    invalid.stars = 9;
    let client = Arc::new(MockPartnerClient::default().with_hotel(
        invalid,
        vec![partner_review("Ana", "Never stored")],
    ));
    let hotels = Arc::new(MockHotelRepo::default());
    let reviews = Arc::new(MockReviewRepo::default());
    let job = SyncJob::new(ids(&["12"]), client, hotels.clone(), reviews.clone());

    let report = job.run_once().await;

    assert_eq!(report.hotels_failed, 1);
    assert!(hotels.hotels.lock().expect("hotels mutex poisoned").is_empty());
    assert!(reviews.stored().is_empty());
}

#[tokio::test]
async fn failed_review_is_counted_while_others_are_stored() {
    let client = Arc::new(MockPartnerClient::default().with_hotel(
        partner_hotel(10, "River House"),
        vec![
            partner_review("Ana", "Rejected"),
            partner_review("Ben", "Accepted"),
        ],
    ));
    let reviews = Arc::new(MockReviewRepo {
        reject_headlines: vec!["Rejected".to_string()],
        ..Default::default()
    });
    let job = SyncJob::new(
        ids(&["10"]),
        client,
        Arc::new(MockHotelRepo::default()),
        reviews.clone(),
    );

    let report = job.run_once().await;

    assert_eq!(report.hotels_synced, 1);
    assert_eq!(report.reviews_upserted, 1);
    assert_eq!(report.reviews_failed, 1);
    assert_eq!(reviews.stored()[0].headline, "Accepted");
}

#[tokio::test]
async fn store_failure_marks_hotel_failed() {
    let client = Arc::new(
        MockPartnerClient::default().with_hotel(partner_hotel(10, "River House"), vec![]),
    );
    let job = SyncJob::new(
        ids(&["10"]),
        client,
        Arc::new(MockHotelRepo::failing()),
        Arc::new(MockReviewRepo::default()),
    );

    let report = job.run_once().await;

    assert_eq!(report.hotels_synced, 0);
    assert_eq!(report.hotels_failed, 1);
}

#[tokio::test]
async fn shutdown_during_a_pass_stops_the_loop() {
    let client = Arc::new(
        MockPartnerClient::default()
            .with_hotel(partner_hotel(10, "River House"), vec![])
            .with_delay(Duration::from_secs(30)),
    );
    let job = SyncJob::new(
        ids(&["10"]),
        client.clone(),
        Arc::new(MockHotelRepo::default()),
        Arc::new(MockReviewRepo::default()),
    );
    let (stop, stopped) = oneshot::channel::<()>();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let _ = stop.send(());
    });

    let passes = tokio::time::timeout(
        Duration::from_secs(5),
        job.run_until(Duration::from_secs(60), async {
            let _ = stopped.await;
        }),
    )
    .await
    .expect("loop should stop while the pass is still running");

    assert_eq!(passes, 0);
    assert_eq!(client.requested(), ids(&["10"]));
}

#[tokio::test]
async fn shutdown_between_passes_stops_the_loop() {
    let client = Arc::new(
        MockPartnerClient::default().with_hotel(partner_hotel(10, "River House"), vec![]),
    );
    let job = SyncJob::new(
        ids(&["10"]),
        client.clone(),
        Arc::new(MockHotelRepo::default()),
        Arc::new(MockReviewRepo::default()),
    );
    let (stop, stopped) = oneshot::channel::<()>();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(120)).await;
        let _ = stop.send(());
    });

    let passes = tokio::time::timeout(
        Duration::from_secs(5),
        job.run_until(Duration::from_millis(20), async {
            let _ = stopped.await;
        }),
    )
    .await
    .expect("loop should stop once shutdown resolves");

    assert!(passes >= 2, "expected repeated passes, got {passes}");
    assert!(client.requested().len() >= passes);
}
