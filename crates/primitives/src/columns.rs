//! Column names of the raw booking schema and of the derived features.

/// Hotel type (`Resort Hotel` / `City Hotel`).
pub const HOTEL: &str = "hotel";
/// Cancellation label.
pub const IS_CANCELED: &str = "is_canceled";
/// Days between booking and arrival.
pub const LEAD_TIME: &str = "lead_time";
/// Arrival year.
pub const ARRIVAL_DATE_YEAR: &str = "arrival_date_year";
/// Arrival month, spelled out (`July`).
pub const ARRIVAL_DATE_MONTH: &str = "arrival_date_month";
/// Arrival ISO week number.
pub const ARRIVAL_DATE_WEEK_NUMBER: &str = "arrival_date_week_number";
/// Arrival day of month.
pub const ARRIVAL_DATE_DAY_OF_MONTH: &str = "arrival_date_day_of_month";
/// Weekend nights booked.
pub const STAYS_IN_WEEKEND_NIGHTS: &str = "stays_in_weekend_nights";
/// Week nights booked.
pub const STAYS_IN_WEEK_NIGHTS: &str = "stays_in_week_nights";
/// Adult guests.
pub const ADULTS: &str = "adults";
/// Child guests (nullable).
pub const CHILDREN: &str = "children";
/// Baby guests.
pub const BABIES: &str = "babies";
/// Meal plan.
pub const MEAL: &str = "meal";
/// Country of origin (nullable).
pub const COUNTRY: &str = "country";
/// Market segment.
pub const MARKET_SEGMENT: &str = "market_segment";
/// Distribution channel.
pub const DISTRIBUTION_CHANNEL: &str = "distribution_channel";
/// Repeated guest flag.
pub const IS_REPEATED_GUEST: &str = "is_repeated_guest";
/// Previously cancelled bookings of the guest.
pub const PREVIOUS_CANCELLATIONS: &str = "previous_cancellations";
/// Previously honoured bookings of the guest.
pub const PREVIOUS_BOOKINGS_NOT_CANCELED: &str = "previous_bookings_not_canceled";
/// Reserved room type code.
pub const RESERVED_ROOM_TYPE: &str = "reserved_room_type";
/// Assigned room type code.
pub const ASSIGNED_ROOM_TYPE: &str = "assigned_room_type";
/// Number of changes made to the booking.
pub const BOOKING_CHANGES: &str = "booking_changes";
/// Deposit type.
pub const DEPOSIT_TYPE: &str = "deposit_type";
/// Travel agent identifier (nullable).
pub const AGENT: &str = "agent";
/// Company identifier (nullable).
pub const COMPANY: &str = "company";
/// Days spent on the waiting list.
pub const DAYS_IN_WAITING_LIST: &str = "days_in_waiting_list";
/// Customer type.
pub const CUSTOMER_TYPE: &str = "customer_type";
/// Average daily rate.
pub const ADR: &str = "adr";
/// Parking spaces requested.
pub const REQUIRED_CAR_PARKING_SPACES: &str = "required_car_parking_spaces";
/// Special requests made.
pub const TOTAL_OF_SPECIAL_REQUESTS: &str = "total_of_special_requests";
/// Final reservation status.
pub const RESERVATION_STATUS: &str = "reservation_status";
/// Date of the final reservation status.
pub const RESERVATION_STATUS_DATE: &str = "reservation_status_date";

/// Raw columns read into a [`crate::BookingRecord`].
pub const RECORD_COLUMNS: &[&str] = &[
    LEAD_TIME,
    ARRIVAL_DATE_YEAR,
    ARRIVAL_DATE_MONTH,
    ARRIVAL_DATE_DAY_OF_MONTH,
    STAYS_IN_WEEKEND_NIGHTS,
    STAYS_IN_WEEK_NIGHTS,
    ADULTS,
    CHILDREN,
    BABIES,
    MEAL,
    COUNTRY,
    IS_REPEATED_GUEST,
    PREVIOUS_CANCELLATIONS,
    PREVIOUS_BOOKINGS_NOT_CANCELED,
    RESERVED_ROOM_TYPE,
    ASSIGNED_ROOM_TYPE,
    BOOKING_CHANGES,
    DEPOSIT_TYPE,
    AGENT,
    DAYS_IN_WAITING_LIST,
    ADR,
    TOTAL_OF_SPECIAL_REQUESTS,
];

/// Raw columns removed by feature derivation.
pub const DROPPED_RAW_COLUMNS: &[&str] = &[
    ARRIVAL_DATE_YEAR,
    ARRIVAL_DATE_DAY_OF_MONTH,
    COMPANY,
    RESERVATION_STATUS,
    RESERVATION_STATUS_DATE,
];

/// Reserved room equals assigned room.
pub const IS_RESERVED_ROOM_SAME_WITH_ASSIGNED_ROOM: &str =
    "is_reserved_room_same_with_assigned_room";
/// Waiting list days over adr.
pub const WAITING_LIST_TO_ADR_RATIO: &str = "waiting_list_to_adr_ratio";
/// Special requests over adr.
pub const TOTAL_SPECIAL_REQUESTS_TO_ADR_RATIO: &str = "total_special_requests_to_adr_ratio";
/// Lead time over adr.
pub const LEAD_TIME_TO_ADR_RATIO: &str = "lead_time_to_adr_ratio";
/// Weekend nights over week nights.
pub const WEEKEND_WEEKDAY_RATIO: &str = "weekend_weekday_ratio";
/// Children without adults.
pub const IS_ONLY_CHILDREN_BOOKING: &str = "is_only_children_booking";
/// Adults without children or babies.
pub const IS_ONLY_ADULT_BOOKING: &str = "is_only_adult_booking";
/// Weekday name of the arrival date.
pub const ARRIVAL_WEEKDAY: &str = "arrival_weekday";
/// Adult-only booking arriving Monday to Friday.
pub const IS_ONLY_ADULTS_ON_WEEKDAY: &str = "is_only_adults_on_weekday";
/// Month name of the booking date.
pub const BOOKING_DATE_MONTH: &str = "booking_date_month";
/// ISO week number of the booking date.
pub const BOOKING_DATE_WEEK_NUMBER: &str = "booking_date_week_number";
/// Weekday name of the booking date.
pub const BOOKING_WEEKDAY: &str = "booking_weekday";
/// Season of the booking date.
pub const BOOKING_SEASON: &str = "booking_season";
/// Season of the arrival date.
pub const ARRIVAL_SEASON: &str = "arrival_season";
/// Booking date falls on a special day.
pub const IS_BOOKING_ON_SPECIAL_DAY: &str = "is_booking_on_special_day";
/// Arrival date falls on a special day.
pub const IS_ARRIVAL_ON_SPECIAL_DAY: &str = "is_arrival_on_special_day";
/// Arrival on Saturday or Sunday.
pub const IS_ARRIVAL_ON_WEEKEND: &str = "is_arrival_on_weekend";
/// Booking made on Saturday or Sunday.
pub const IS_BOOKING_ON_WEEKEND: &str = "is_booking_on_weekend";
/// Sum of previous cancellations and previous honoured bookings.
pub const TOTAL_PREVIOUS_BOOKINGS: &str = "total_previous_bookings";
/// Share of previous bookings that were cancelled, in percent.
pub const PREVIOUS_CANCELLATION_PERCENTAGE: &str = "previous_cancellation_percentage";
/// Booking changes over lead time.
pub const BOOKING_CHANGES_TO_LEAD_TIME_RATIO: &str = "booking_changes_to_lead_time_ratio";
/// Booking changes over adr.
pub const BOOKING_CHANGES_TO_ADR_RATIO: &str = "booking_changes_to_adr_ratio";
/// Special requests over lead time.
pub const TOTAL_SPECIAL_REQUESTS_TO_LEAD_TIME_RATIO: &str =
    "total_special_requests_to_lead_time_ratio";
/// Previous bookings over special requests.
pub const TOTAL_PREVIOUS_BOOKINGS_TO_TOTAL_SPECIAL_REQUESTS_RATIO: &str =
    "total_previous_bookings_to_total_special_requests_ratio";
/// Premium room reserved, non-premium assigned.
pub const IS_PREMIUM_ROOM_DOWNGRADED: &str = "is_premium_room_downgraded";
/// Non-premium room reserved, premium assigned.
pub const IS_ROOM_UPGRADED_TO_PREMIUM: &str = "is_room_upgraded_to_premium";
/// Long lead time with refundable deposit.
pub const IS_EARLY_REFUNDABLE_BOOKING: &str = "is_early_refundable_booking";
/// Short lead time with non-refundable deposit.
pub const IS_LATE_NON_REFUNDABLE_BOOKING: &str = "is_late_non_refundable_booking";
/// Lead time over total stay length.
pub const LEAD_TIME_TO_TOTAL_STAY_RATIO: &str = "lead_time_to_total_stay_ratio";
/// Long stay without a meal plan.
pub const IS_LONG_STAY_NO_MEAL: &str = "is_long_stay_no_meal";
/// Children or babies without a meal plan.
pub const HAS_KIDS_BUT_NO_MEAL: &str = "has_kids_but_no_meal";
/// Agent books rarely.
pub const IS_LOW_ACTIVITY_AGENT: &str = "is_low_activity_agent";
/// Adults plus children plus babies.
pub const TOTAL_PEOPLE: &str = "total_people";
/// Repeated guest whose room was changed.
pub const IS_REPEATED_GUEST_BUT_CHANGED_ROOM: &str = "is_repeated_guest_but_changed_room";
/// Lead time under a week.
pub const IS_LATE_BOOKING: &str = "is_late_booking";
/// Exactly one guest.
pub const IS_SOLO_TRAVELER: &str = "is_solo_traveler";

/// Placeholder for a missing country or agent.
pub const UNKNOWN: &str = "unknown";
