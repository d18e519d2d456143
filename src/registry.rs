use thiserror::Error;

use crate::models::{ClassOverview, ClassSchedule, Member};
use crate::validation::is_valid_email;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
    #[error("This email is already in use")]
    DuplicateEmail,
    #[error("Member not found. Please register first")]
    MemberNotFound,
    #[error("Class not found")]
    ClassNotFound,
    #[error("Member is already checked in")]
    AlreadyCheckedIn,
    #[error("Member is already checked out")]
    AlreadyCheckedOut,
    #[error("Member is already signed up for this class")]
    AlreadyEnrolled,
    #[error("Member is not currently enrolled in this class")]
    NotEnrolled,
    #[error("Class is full")]
    ClassFull,
}

/// Canonical owner of all members and class schedules. Mutating operations
/// either fully succeed or leave the registry untouched; callers serialize
/// access through one lock (see `AppState`).
pub struct Registry {
    members: Vec<Member>,
    classes: Vec<ClassSchedule>,
    // Monotonic counters, never derived from current collection length, so
    // an id is never reissued.
    next_member_seq: u32,
    next_class_seq: u32,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            classes: Vec::new(),
            next_member_seq: 1,
            next_class_seq: 1,
        }
    }

    /// Adds a class schedule at startup. Classes are never removed, and the
    /// listing order is the seed order.
    pub fn add_class(&mut self, name: &str, instructor: &str, time: &str, capacity: usize) {
        let class_id = format!("C{:03}", self.next_class_seq);
        self.next_class_seq += 1;
        self.classes.push(ClassSchedule::new(
            class_id,
            name.to_string(),
            instructor.to_string(),
            time.to_string(),
            capacity,
        ));
    }

    /// Registers a new member. The email must be well-formed and unused
    /// (exact, case-sensitive comparison). Members keep their insertion
    /// order; ids are sequential and never reused.
    pub fn register(&mut self, name: &str, email: &str) -> Result<Member, DomainError> {
        if !is_valid_email(email) {
            return Err(DomainError::InvalidEmailFormat);
        }
        if self.members.iter().any(|m| m.email == email) {
            return Err(DomainError::DuplicateEmail);
        }

        let member_id = format!("M{:03}", self.next_member_seq);
        self.next_member_seq += 1;

        let member = Member::new(member_id, name.to_string(), email.to_string());
        self.members.push(member.clone());
        Ok(member)
    }

    /// Linear scan, first match, case-sensitive.
    pub fn find_member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.member_id == member_id)
    }

    fn find_member_mut(&mut self, member_id: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.member_id == member_id)
    }

    fn find_class(&self, class_name: &str) -> Option<&ClassSchedule> {
        self.classes.iter().find(|c| c.name == class_name)
    }

    fn find_class_mut(&mut self, class_name: &str) -> Option<&mut ClassSchedule> {
        self.classes.iter_mut().find(|c| c.name == class_name)
    }

    pub fn check_in(&mut self, member_id: &str) -> Result<Member, DomainError> {
        let member = self
            .find_member_mut(member_id)
            .ok_or(DomainError::MemberNotFound)?;
        if member.checked_in {
            return Err(DomainError::AlreadyCheckedIn);
        }
        member.checked_in = true;
        Ok(member.clone())
    }

    pub fn check_out(&mut self, member_id: &str) -> Result<Member, DomainError> {
        let member = self
            .find_member_mut(member_id)
            .ok_or(DomainError::MemberNotFound)?;
        if !member.checked_in {
            return Err(DomainError::AlreadyCheckedOut);
        }
        member.checked_in = false;
        Ok(member.clone())
    }

    /// Enrolls a member into a class. The capacity check happens before any
    /// mutation, so a failed enroll leaves the roster exactly as it was.
    pub fn enroll(&mut self, class_name: &str, member_id: &str) -> Result<Member, DomainError> {
        let member = self
            .find_member(member_id)
            .ok_or(DomainError::MemberNotFound)?
            .clone();
        let class = self
            .find_class_mut(class_name)
            .ok_or(DomainError::ClassNotFound)?;

        if class.enrolled_member_ids.iter().any(|id| id == member_id) {
            return Err(DomainError::AlreadyEnrolled);
        }
        if class.is_full() {
            return Err(DomainError::ClassFull);
        }
        class.enrolled_member_ids.push(member_id.to_string());
        Ok(member)
    }

    pub fn withdraw(&mut self, class_name: &str, member_id: &str) -> Result<Member, DomainError> {
        let member = self
            .find_member(member_id)
            .ok_or(DomainError::MemberNotFound)?
            .clone();
        let class = self
            .find_class_mut(class_name)
            .ok_or(DomainError::ClassNotFound)?;

        let position = class
            .enrolled_member_ids
            .iter()
            .position(|id| id == member_id)
            .ok_or(DomainError::NotEnrolled)?;
        class.enrolled_member_ids.remove(position);
        Ok(member)
    }

    /// Names of everyone enrolled in a class, in enrollment order. Pure
    /// projection, no side effect.
    pub fn enrolled_names(&self, class_name: &str) -> Result<Vec<String>, DomainError> {
        let class = self.find_class(class_name).ok_or(DomainError::ClassNotFound)?;
        Ok(self.roster_names(class))
    }

    pub fn list_classes(&self) -> Vec<ClassOverview> {
        self.classes
            .iter()
            .map(|class| ClassOverview {
                name: class.name.clone(),
                instructor: class.instructor.clone(),
                time: class.time.clone(),
                capacity: class.capacity,
                enrolled_members: self.roster_names(class),
            })
            .collect()
    }

    fn roster_names(&self, class: &ClassSchedule) -> Vec<String> {
        class
            .enrolled_member_ids
            .iter()
            .filter_map(|id| self.find_member(id))
            .map(|m| m.name.clone())
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
