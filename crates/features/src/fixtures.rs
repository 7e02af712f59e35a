//! Booking frames and records for tests and benchmarks.

use hotelprep_primitives::{BookingRecord, columns as c, month_name};
use polars::prelude::*;
use rand::prelude::*;

/// Six raw bookings with every raw column.
///
/// Row 1 has no country, row 2 no children; row 0 has no agent. Agents:
/// `"9"` three times, `"240"` twice. Row 5 carries the known `adr = 5400`
/// anomaly.
pub fn raw_bookings() -> DataFrame {
    df! {
        c::HOTEL => &["City Hotel", "Resort Hotel", "City Hotel", "Resort Hotel", "City Hotel", "Resort Hotel"],
        c::IS_CANCELED => &[0i64, 1, 0, 0, 1, 0],
        c::LEAD_TIME => &[342i64, 5, 120, 0, 45, 30],
        c::ARRIVAL_DATE_YEAR => &[2015i64, 2016, 2017, 2016, 2015, 2017],
        c::ARRIVAL_DATE_MONTH => &["July", "December", "May", "February", "October", "August"],
        c::ARRIVAL_DATE_WEEK_NUMBER => &[27i64, 51, 18, 7, 44, 33],
        c::ARRIVAL_DATE_DAY_OF_MONTH => &[1i64, 25, 1, 14, 31, 15],
        c::STAYS_IN_WEEKEND_NIGHTS => &[0i64, 1, 2, 1, 2, 2],
        c::STAYS_IN_WEEK_NIGHTS => &[0i64, 2, 5, 0, 3, 5],
        c::ADULTS => &[2i64, 0, 2, 1, 2, 3],
        c::CHILDREN => &[Some(0i64), Some(2), None, Some(0), Some(1), Some(0)],
        c::BABIES => &[0i64, 0, 1, 0, 0, 0],
        c::MEAL => &["BB", "SC", "Undefined", "HB", "BB", "SC"],
        c::COUNTRY => &[Some("PRT"), None, Some("GBR"), Some("PRT"), Some("FRA"), Some("ESP")],
        c::MARKET_SEGMENT => &["Direct", "Online TA", "Groups", "Direct", "Online TA", "Offline TA/TO"],
        c::DISTRIBUTION_CHANNEL => &["Direct", "TA/TO", "TA/TO", "Direct", "TA/TO", "TA/TO"],
        c::IS_REPEATED_GUEST => &[0i64, 1, 0, 0, 0, 0],
        c::PREVIOUS_CANCELLATIONS => &[0i64, 1, 0, 0, 2, 0],
        c::PREVIOUS_BOOKINGS_NOT_CANCELED => &[0i64, 1, 0, 2, 0, 0],
        c::RESERVED_ROOM_TYPE => &["C", "A", "H", "A", "D", "E"],
        c::ASSIGNED_ROOM_TYPE => &["C", "G", "A", "A", "D", "F"],
        c::BOOKING_CHANGES => &[3i64, 0, 1, 0, 0, 2],
        c::DEPOSIT_TYPE => &["No Deposit", "Non Refund", "Refundable", "No Deposit", "No Deposit", "No Deposit"],
        c::AGENT => &[None, Some(9.0), Some(240.0), Some(9.0), Some(9.0), Some(240.0)],
        c::COMPANY => &[None, None, Some(45.0), None, None, None],
        c::DAYS_IN_WAITING_LIST => &[0i64, 0, 10, 0, 0, 0],
        c::CUSTOMER_TYPE => &["Transient", "Transient", "Transient-Party", "Transient", "Transient", "Contract"],
        c::ADR => &[0.0, 120.5, 80.0, 60.0, 110.0, 5400.0],
        c::REQUIRED_CAR_PARKING_SPACES => &[0i64, 0, 1, 0, 0, 0],
        c::TOTAL_OF_SPECIAL_REQUESTS => &[0i64, 1, 2, 0, 0, 3],
        c::RESERVATION_STATUS => &["Check-Out", "Canceled", "Check-Out", "Check-Out", "Canceled", "Check-Out"],
        c::RESERVATION_STATUS_DATE => &["2015-07-01", "2016-12-01", "2017-05-08", "2016-02-15", "2015-09-20", "2017-08-22"],
    }
    .expect("fixture frame")
}

/// An ordinary two-adult booking.
pub fn record() -> BookingRecord {
    BookingRecord {
        lead_time: 14,
        arrival_date_year: Some(2016),
        arrival_date_month: Some("March".to_string()),
        arrival_date_day_of_month: Some(9),
        stays_in_weekend_nights: 1,
        stays_in_week_nights: 2,
        adults: 2,
        children: Some(0),
        babies: 0,
        meal: "BB".to_string(),
        country: Some("PRT".to_string()),
        is_repeated_guest: 0,
        previous_cancellations: 0,
        previous_bookings_not_canceled: 0,
        reserved_room_type: "A".to_string(),
        assigned_room_type: "A".to_string(),
        booking_changes: 0,
        deposit_type: "No Deposit".to_string(),
        agent: Some("9".to_string()),
        days_in_waiting_list: 0,
        adr: 95.0,
        total_of_special_requests: 0,
    }
}

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

/// `n` random raw bookings, reproducible from `seed`.
///
/// Roughly one row in fifty has no children count, one in ten no agent.
pub fn synthetic_bookings(n: usize, seed: u64) -> DataFrame {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut hotel = Vec::with_capacity(n);
    let mut canceled = Vec::with_capacity(n);
    let mut lead_time = Vec::with_capacity(n);
    let mut year = Vec::with_capacity(n);
    let mut month = Vec::with_capacity(n);
    let mut week = Vec::with_capacity(n);
    let mut day = Vec::with_capacity(n);
    let mut weekend_nights = Vec::with_capacity(n);
    let mut week_nights = Vec::with_capacity(n);
    let mut adults = Vec::with_capacity(n);
    let mut children = Vec::with_capacity(n);
    let mut babies = Vec::with_capacity(n);
    let mut meal = Vec::with_capacity(n);
    let mut country = Vec::with_capacity(n);
    let mut segment = Vec::with_capacity(n);
    let mut channel = Vec::with_capacity(n);
    let mut repeated = Vec::with_capacity(n);
    let mut prev_cancel = Vec::with_capacity(n);
    let mut prev_kept = Vec::with_capacity(n);
    let mut reserved = Vec::with_capacity(n);
    let mut assigned = Vec::with_capacity(n);
    let mut changes = Vec::with_capacity(n);
    let mut deposit = Vec::with_capacity(n);
    let mut agent = Vec::with_capacity(n);
    let mut company = Vec::with_capacity(n);
    let mut waiting = Vec::with_capacity(n);
    let mut customer = Vec::with_capacity(n);
    let mut adr = Vec::with_capacity(n);
    let mut parking = Vec::with_capacity(n);
    let mut requests = Vec::with_capacity(n);
    let mut status = Vec::with_capacity(n);
    let mut status_date = Vec::with_capacity(n);

    let rooms = ["A", "B", "C", "D", "E", "F", "G", "H"];
    for _ in 0..n {
        let m: u32 = rng.gen_range(1..=12);
        let is_canceled: i64 = rng.gen_range(0..=1);

        hotel.push(pick(&mut rng, &["City Hotel", "Resort Hotel"]));
        canceled.push(is_canceled);
        lead_time.push(rng.gen_range(0i64..400));
        year.push(rng.gen_range(2015i64..=2017));
        month.push(month_name(m).unwrap_or_default());
        week.push(i64::from((m - 1) * 4 + rng.gen_range(1..=4)));
        day.push(rng.gen_range(1i64..=28));
        weekend_nights.push(rng.gen_range(0i64..=4));
        week_nights.push(rng.gen_range(0i64..=10));
        adults.push(rng.gen_range(0i64..=3));
        children.push(if rng.gen_bool(0.02) { None } else { Some(rng.gen_range(0i64..=2)) });
        babies.push(i64::from(rng.gen_bool(0.05)));
        meal.push(pick(&mut rng, &["BB", "HB", "FB", "SC", "Undefined"]));
        country.push(if rng.gen_bool(0.01) {
            None
        } else {
            Some(pick(&mut rng, &["PRT", "GBR", "FRA", "ESP", "DEU"]))
        });
        segment.push(pick(&mut rng, &["Direct", "Corporate", "Online TA", "Offline TA/TO", "Groups"]));
        channel.push(pick(&mut rng, &["Direct", "Corporate", "TA/TO"]));
        repeated.push(i64::from(rng.gen_bool(0.03)));
        prev_cancel.push(rng.gen_range(0i64..=2));
        prev_kept.push(rng.gen_range(0i64..=3));
        reserved.push(pick(&mut rng, &rooms));
        assigned.push(pick(&mut rng, &rooms));
        changes.push(rng.gen_range(0i64..=3));
        deposit.push(pick(&mut rng, &["No Deposit", "Non Refund", "Refundable"]));
        agent.push(if rng.gen_bool(0.1) { None } else { Some(f64::from(rng.gen_range(1u32..=40))) });
        company.push(if rng.gen_bool(0.95) { None } else { Some(f64::from(rng.gen_range(1u32..=500))) });
        waiting.push(if rng.gen_bool(0.9) { 0i64 } else { rng.gen_range(1i64..=60) });
        customer.push(pick(&mut rng, &["Transient", "Transient-Party", "Contract", "Group"]));
        adr.push((rng.gen_range(0.0..300.0_f64) * 100.0).round() / 100.0);
        parking.push(i64::from(rng.gen_bool(0.1)));
        requests.push(rng.gen_range(0i64..=3));
        status.push(if is_canceled == 1 { "Canceled" } else { "Check-Out" });
        status_date.push("2017-01-01");
    }

    df! {
        c::HOTEL => hotel,
        c::IS_CANCELED => canceled,
        c::LEAD_TIME => lead_time,
        c::ARRIVAL_DATE_YEAR => year,
        c::ARRIVAL_DATE_MONTH => month,
        c::ARRIVAL_DATE_WEEK_NUMBER => week,
        c::ARRIVAL_DATE_DAY_OF_MONTH => day,
        c::STAYS_IN_WEEKEND_NIGHTS => weekend_nights,
        c::STAYS_IN_WEEK_NIGHTS => week_nights,
        c::ADULTS => adults,
        c::CHILDREN => children,
        c::BABIES => babies,
        c::MEAL => meal,
        c::COUNTRY => country,
        c::MARKET_SEGMENT => segment,
        c::DISTRIBUTION_CHANNEL => channel,
        c::IS_REPEATED_GUEST => repeated,
        c::PREVIOUS_CANCELLATIONS => prev_cancel,
        c::PREVIOUS_BOOKINGS_NOT_CANCELED => prev_kept,
        c::RESERVED_ROOM_TYPE => reserved,
        c::ASSIGNED_ROOM_TYPE => assigned,
        c::BOOKING_CHANGES => changes,
        c::DEPOSIT_TYPE => deposit,
        c::AGENT => agent,
        c::COMPANY => company,
        c::DAYS_IN_WAITING_LIST => waiting,
        c::CUSTOMER_TYPE => customer,
        c::ADR => adr,
        c::REQUIRED_CAR_PARKING_SPACES => parking,
        c::TOTAL_OF_SPECIAL_REQUESTS => requests,
        c::RESERVATION_STATUS => status,
        c::RESERVATION_STATUS_DATE => status_date,
    }
    .expect("synthetic frame")
}
