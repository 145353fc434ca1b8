//! Diesel schema for the task collection.

diesel::table! {
    /// Task documents scoped by owning user.
    tasks (id) {
        /// Task identifier (document key).
        #[max_length = 255]
        id -> Varchar,
        /// Owning principal (partition key).
        #[max_length = 255]
        user_id -> Varchar,
        /// Opaque document payload.
        payload -> Jsonb,
        /// Server-assigned creation timestamp.
        created_at -> Timestamptz,
        /// Server-assigned last-replace timestamp.
        updated_at -> Timestamptz,
    }
}
