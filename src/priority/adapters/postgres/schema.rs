//! Diesel schema for priority reference data.

diesel::table! {
    /// Priority reference records seeded from the fixed catalogue.
    task_priorities (id) {
        /// Stable priority identifier.
        id -> Int4,
        /// Display label.
        #[max_length = 100]
        label -> Varchar,
        /// Presentation colour token.
        #[max_length = 50]
        color -> Varchar,
        /// Catalogue ordering position.
        position -> Int4,
    }
}
