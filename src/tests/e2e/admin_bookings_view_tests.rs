use crate::modules::bookings::adapters::outbound::booking_feed_in_memory::InMemoryBookingFeed;
use crate::modules::bookings::core::view_params::{PageSize, SortOrder, StatusFilter, ViewParams};
use crate::modules::bookings::core::view_state::{ViewAction, reduce};
use crate::modules::bookings::use_cases::list_bookings::handler::ListBookingsHandler;
use crate::tests::fixtures::booking_records::{BOOKINGS_FEED_JSON, BookingRecordBuilder};
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

#[tokio::test]
async fn browses_a_seeded_feed_through_the_status_branches() {
    let feed = InMemoryBookingFeed::from_seed_file(Path::new(BOOKINGS_FEED_JSON))
        .await
        .unwrap();
    let handler = ListBookingsHandler::new(Arc::new(feed));

    let params = ViewParams::default();
    let all = handler.handle(&params).await.unwrap();
    assert_eq!(all.total_count, 1);
    assert_eq!(all.page[0].booking_id, "BK-1001");
    assert_eq!(all.page[0].id, 12);

    // BK-1001 was rejected once, then went back in progress
    let params = reduce(params, ViewAction::SetStatusFilter(StatusFilter::Reject));
    let rejected = handler.handle(&params).await.unwrap();
    assert_eq!(rejected.total_count, 0);
    assert_eq!(rejected.total_pages, 0);

    // the completed booking was never paid
    let params = reduce(params, ViewAction::SetStatusFilter(StatusFilter::Completed));
    let completed = handler.handle(&params).await.unwrap();
    assert!(completed.page.is_empty());
}

#[tokio::test]
async fn pages_through_deduplicated_bookings() {
    let feed = Arc::new(InMemoryBookingFeed::new());
    for i in 0..12 {
        // every booking was written twice, the rewrite carries the final booking time
        feed.push(
            BookingRecordBuilder::new()
                .id(i * 2)
                .booking_id(format!("B{i:02}"))
                .booking_time(1_000 - i)
                .created_at(1)
                .build(),
        )
        .await;
        feed.push(
            BookingRecordBuilder::new()
                .id(i * 2 + 1)
                .booking_id(format!("B{i:02}"))
                .booking_time(i)
                .created_at(2)
                .build(),
        )
        .await;
    }
    let handler = ListBookingsHandler::new(feed);

    let mut params = reduce(
        ViewParams::default(),
        ViewAction::SetPageSize(PageSize::Limit(NonZeroUsize::new(5).unwrap())),
    );
    params = reduce(params, ViewAction::SetSortOrder(SortOrder::Asc));

    let mut seen = Vec::new();
    loop {
        let view = handler.handle(&params).await.unwrap();
        assert_eq!(view.total_count, 12);
        assert_eq!(view.total_pages, 3);
        seen.extend(view.page.iter().map(|r| r.booking_id.clone()));
        let next = reduce(params.clone(), ViewAction::NextPage { total_pages: view.total_pages });
        if next == params {
            assert_eq!(view.page.len(), 2);
            break;
        }
        params = next;
    }

    let expected: Vec<String> = (0..12).map(|i| format!("B{i:02}")).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn searches_across_the_admin_columns() {
    let feed = InMemoryBookingFeed::with_records(vec![
        BookingRecordBuilder::new().id(1).booking_id("B1").worker_name("Alice Painter").build(),
        BookingRecordBuilder::new().id(2).booking_id("B2").customer_name("Alice Owner").build(),
        BookingRecordBuilder::new().id(3).booking_id("B3").build(),
    ]);
    let handler = ListBookingsHandler::new(Arc::new(feed));

    let params = reduce(
        ViewParams {
            page_number: 2,
            ..ViewParams::default()
        },
        ViewAction::SetSearchQuery("alice".to_string()),
    );
    let view = handler.handle(&params).await.unwrap();

    assert_eq!(view.page_number, 1);
    assert_eq!(view.total_count, 2);
    assert!(view.page.iter().all(|r| r.booking_id != "B3"));
}
