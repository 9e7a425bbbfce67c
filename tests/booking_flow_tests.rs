use frontdesk::domain::bill::BookingRequest;
use frontdesk::error::{DeskError, ValidationError};
use rust_decimal::Decimal;

mod common;
use common::logged_in_desk;

fn request(room: &str, guest: &str, check_in: &str, check_out: &str) -> BookingRequest {
    BookingRequest {
        room_number: room.to_string(),
        guest_name: guest.to_string(),
        check_in: check_in.parse().unwrap(),
        check_out: check_out.parse().unwrap(),
        services: vec![],
    }
}

#[tokio::test]
async fn test_total_matches_nights_times_rate_plus_services() {
    // (room, rate, check_in, check_out, nights)
    let cases = [
        ("101", 100, "2024-01-01", "2024-01-02", 1),
        ("102", 100, "2024-01-01", "2024-01-08", 7),
        ("201", 200, "2024-02-27", "2024-03-02", 4), // leap year boundary
        ("301", 300, "2024-12-31", "2025-01-02", 2),
    ];

    let desk = logged_in_desk().await;
    for (room, rate, check_in, check_out, nights) in cases {
        let mut req = request(room, "Guest", check_in, check_out);
        req.services = vec!["2".to_string(), "4".to_string()]; // 15 + 40
        let bill = desk.book(req).await.unwrap();
        assert_eq!(bill.nights(), nights);
        assert_eq!(
            bill.total.value(),
            Decimal::from(nights * rate + 55),
            "room {room} {check_in}..{check_out}"
        );
    }
}

#[tokio::test]
async fn test_zero_or_negative_stays_always_rejected() {
    let pairs = [
        ("2024-01-01", "2024-01-01"),
        ("2024-01-02", "2024-01-01"),
        ("2024-03-01", "2024-02-28"),
    ];

    let desk = logged_in_desk().await;
    for (check_in, check_out) in pairs {
        let err = desk
            .book(request("101", "Alice", check_in, check_out))
            .await
            .unwrap_err();
        assert!(
            matches!(
                err,
                DeskError::Validation(ValidationError::InvalidStay { .. })
            ),
            "{check_in}..{check_out} should be rejected"
        );
    }
    assert!(desk.bills().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ledger_order_survives_payments() {
    let desk = logged_in_desk().await;
    let b1 = desk
        .book(request("101", "Alice", "2024-01-01", "2024-01-02"))
        .await
        .unwrap();
    let b2 = desk
        .book(request("102", "Bob", "2024-01-01", "2024-01-02"))
        .await
        .unwrap();
    let b3 = desk
        .book(request("201", "Carol", "2024-01-01", "2024-01-02"))
        .await
        .unwrap();

    // Paying the middle bill must not reorder anything
    assert!(desk.mark_paid(b2.id).await.unwrap());

    let bills = desk.bills().await.unwrap();
    let ids: Vec<u64> = bills.iter().map(|b| b.id).collect();
    assert_eq!(ids, [b1.id, b2.id, b3.id]);
    assert!(!bills[0].paid);
    assert!(bills[1].paid);
    assert!(!bills[2].paid);
}

#[tokio::test]
async fn test_relogin_after_logout() {
    let desk = logged_in_desk().await;
    desk.logout().await;

    assert!(!desk.login("admin", "wrong").await);
    assert!(matches!(
        desk.bills().await,
        Err(DeskError::NotAuthenticated)
    ));

    assert!(desk.login("admin", "admin123").await);
    let bill = desk
        .book(request("301", "Alice", "2024-05-01", "2024-05-03"))
        .await
        .unwrap();
    assert_eq!(bill.total.value(), Decimal::from(600));
}

#[tokio::test]
async fn test_services_snapshot_is_catalog_order() {
    let desk = logged_in_desk().await;
    let names: Vec<String> = desk
        .services()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(
        names,
        ["Room Service", "Laundry", "Spa Treatment", "Airport Transfer"]
    );
}
