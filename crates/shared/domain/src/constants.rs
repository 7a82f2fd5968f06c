//! Domain-level constants.
//!
//! Lookup failure messages and the phone number format.

// =============================================================================
// Lookup failures
// =============================================================================

/// Message carried by a failed board lookup
pub const BOARD_NOT_FOUND: &str = "Board not found";

/// Message carried by a failed user lookup
pub const USER_NOT_FOUND: &str = "User not found";

/// Message carried by a failed comment lookup inside an existing board
pub const COMMENT_NOT_FOUND: &str = "Comment not found";

// =============================================================================
// Validation
// =============================================================================

/// Korean mobile number, with or without dashes (e.g. 010-1234-5678)
pub const PHONE_NUMBER_PATTERN: &str = r"^01[016789]-?\d{3,4}-?\d{4}$";
