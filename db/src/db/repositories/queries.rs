// SQL query constants for repositories
// Centralizes repeated SELECT column lists to follow DRY principle

/// SQL query fragments for the users table
pub mod user_queries {
    /// All columns for the users table
    pub const SELECT_ALL_COLUMNS: &str = "id, name, email, password";
}

/// SQL query fragments for the properties table
pub mod property_queries {
    /// All columns for the properties table
    pub const SELECT_ALL_COLUMNS: &str = r#"id, owner_id, title, description,
        thumbnail_photo_url, cover_photo_url, cost_per_night, parking_spaces,
        number_of_bathrooms, number_of_bedrooms, country, street, city,
        province, post_code, active"#;

    /// Property columns qualified for joined queries, plus the aggregated
    /// review rating
    ///
    /// # NULL Handling
    /// - average_rating: stays NULL when no non-NULL rating exists; the cast
    ///   to float8 keeps the aggregate decodable as a double
    pub const SELECT_LISTING_COLUMNS: &str = r#"properties.id, properties.owner_id,
        properties.title, properties.description, properties.thumbnail_photo_url,
        properties.cover_photo_url, properties.cost_per_night, properties.parking_spaces,
        properties.number_of_bathrooms, properties.number_of_bedrooms, properties.country,
        properties.street, properties.city, properties.province, properties.post_code,
        properties.active,
        avg(property_reviews.rating)::float8 AS average_rating"#;
}
