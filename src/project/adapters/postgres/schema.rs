//! Diesel schema for project and task persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 50]
        name -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Red channel in `[0, 1]`.
        red -> Float8,
        /// Green channel in `[0, 1]`.
        green -> Float8,
        /// Blue channel in `[0, 1]`.
        blue -> Float8,
        /// Symbol identifier.
        #[max_length = 100]
        icon -> Varchar,
        /// Methodology storage string.
        #[max_length = 50]
        methodology -> Varchar,
        /// Schedule start.
        start_at -> Timestamptz,
        /// Schedule end.
        end_at -> Timestamptz,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records, removed together with their project.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
        /// Display name.
        #[max_length = 50]
        name -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Red channel in `[0, 1]`.
        red -> Float8,
        /// Green channel in `[0, 1]`.
        green -> Float8,
        /// Blue channel in `[0, 1]`.
        blue -> Float8,
        /// Symbol identifier.
        #[max_length = 100]
        icon -> Varchar,
        /// Priority storage string.
        #[max_length = 20]
        priority -> Varchar,
        /// Schedule start.
        start_at -> Timestamptz,
        /// Schedule end.
        end_at -> Timestamptz,
        /// Ordered subtask texts as a JSON array.
        subtasks -> Jsonb,
        /// Completion flag.
        done -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, tasks);
