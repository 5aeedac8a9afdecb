// Helper functions shared across GraphQL query/mutation modules.

use crate::db::{AuthorRecord, BookRecord, ReviewRecord};
use crate::graphql::types::{Author, Book, Review};

/// Convert an AuthorRecord from the database to a GraphQL Author type
pub(crate) fn author_record_to_graphql(r: AuthorRecord) -> Author {
    Author {
        id: r.id,
        name: r.name,
    }
}

/// Convert a BookRecord from the database to a GraphQL Book type
pub(crate) fn book_record_to_graphql(r: BookRecord) -> Book {
    Book {
        id: r.id,
        title: r.title,
        author_id: r.author_id,
    }
}

/// Convert a ReviewRecord from the database to a GraphQL Review type
pub(crate) fn review_record_to_graphql(r: ReviewRecord) -> Review {
    Review {
        id: r.id,
        book_id: r.book_id,
        reviewer_name: r.reviewer_name,
        rating: r.rating,
        comment: r.comment,
        verified: r.verified,
        created_at: r.created_at.to_rfc3339(),
    }
}
