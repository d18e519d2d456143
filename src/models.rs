use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Member {
    #[schema(example = "M001")]
    pub member_id: String,
    pub name: String,
    pub email: String,
    pub checked_in: bool,
}

impl Member {
    pub fn new(member_id: String, name: String, email: String) -> Self {
        Self {
            member_id,
            name,
            email,
            checked_in: false,
        }
    }
}

/// A scheduled class with a bounded roster. The roster stores member ids in
/// enrollment order; the registry owns the members themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ClassSchedule {
    #[schema(example = "C001")]
    pub class_id: String,
    pub name: String,
    pub instructor: String,
    #[schema(example = "10:00 AM")]
    pub time: String,
    pub capacity: usize,
    pub enrolled_member_ids: Vec<String>,
}

impl ClassSchedule {
    pub fn new(
        class_id: String,
        name: String,
        instructor: String,
        time: String,
        capacity: usize,
    ) -> Self {
        Self {
            class_id,
            name,
            instructor,
            time,
            capacity,
            enrolled_member_ids: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.enrolled_member_ids.len() >= self.capacity
    }
}

/// Row returned by the class listing: schedule details plus the names of
/// everyone currently enrolled, in enrollment order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ClassOverview {
    pub name: String,
    pub instructor: String,
    pub time: String,
    pub capacity: usize,
    pub enrolled_members: Vec<String>,
}
