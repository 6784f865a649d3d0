diesel::table! {
    holdings (id) {
        id -> Text,
        name -> Text,
        symbol -> Text,
        holding_type -> Text,
        quantity -> Double,
        avg_price -> Double,
        current_price -> Nullable<Double>,
        sector -> Nullable<Text>,
        recommendations -> Nullable<Text>,
        last_updated -> Timestamp,
        created_at -> Timestamp,
    }
}

diesel::table! {
    goals (id) {
        id -> Text,
        name -> Text,
        target_amount -> Double,
        current_amount -> Double,
        time_horizon -> Text,
        priority -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    wishlist (id) {
        id -> Text,
        name -> Text,
        symbol -> Text,
        current_price -> Double,
        target_price -> Double,
        sector -> Nullable<Text>,
        reasoning -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    user_preferences (id) {
        id -> Text,
        email -> Text,
        notification_time -> Text,
        risk_profile -> Text,
        preferred_sectors -> Text,
        daily_summary_enabled -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    price_history (id) {
        id -> Text,
        symbol -> Text,
        price -> Double,
        recorded_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    holdings,
    goals,
    wishlist,
    user_preferences,
    price_history,
);
