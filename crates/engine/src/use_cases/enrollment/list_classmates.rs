//! List classmates use case.
//!
//! For each course the student is actively enrolled in, lists the other
//! students actively enrolled in it.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use coursemgmt_domain::{CourseId, StudentId};

use crate::entities::{Course, Enrollment, Student};

use super::error::EnrollmentError;
use super::types::{Classmate, CourseClassmates};

pub struct ListClassmates {
    student: Arc<Student>,
    course: Arc<Course>,
    enrollment: Arc<Enrollment>,
}

impl ListClassmates {
    pub fn new(student: Arc<Student>, course: Arc<Course>, enrollment: Arc<Enrollment>) -> Self {
        Self {
            student,
            course,
            enrollment,
        }
    }

    /// Classmates grouped by course, ordered by course id then student id.
    pub async fn execute(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<CourseClassmates>, EnrollmentError> {
        self.student
            .get(student_id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, student_id = %student_id, "Failed to load student");
                EnrollmentError::infrastructure("failed to retrieve student data", e)
            })?
            .ok_or_else(|| {
                tracing::debug!(student_id = %student_id, "Classmate listing rejected: unknown student");
                EnrollmentError::StudentNotFound
            })?;

        let rows = self
            .enrollment
            .list_classmates(student_id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, student_id = %student_id, "Failed to list classmates");
                EnrollmentError::infrastructure("failed to get list of classmates", e)
            })?;

        let mut grouped: BTreeMap<CourseId, BTreeSet<StudentId>> = BTreeMap::new();
        for row in rows {
            grouped.entry(row.course_id).or_default().insert(row.student_id);
        }

        let mut result = Vec::with_capacity(grouped.len());
        for (course_id, members) in grouped {
            let course = self
                .course
                .get(course_id)
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, course_id = %course_id, "Failed to load course");
                    EnrollmentError::infrastructure("failed to retrieve course data", e)
                })?
                .ok_or_else(|| {
                    tracing::debug!(course_id = %course_id, "Enrollment references missing course");
                    EnrollmentError::MissingCourse(course_id)
                })?;

            let mut classmates = Vec::with_capacity(members.len());
            for member_id in members {
                // The query already excludes self; rows from other sources might not
                if member_id == student_id {
                    continue;
                }

                let member = self
                    .student
                    .get(member_id)
                    .await
                    .map_err(|e| {
                        tracing::warn!(error = %e, student_id = %member_id, "Failed to load classmate");
                        EnrollmentError::infrastructure(
                            format!("failed to retrieve student data: {member_id}"),
                            e,
                        )
                    })?
                    .ok_or_else(|| {
                        tracing::debug!(student_id = %member_id, "Enrollment references missing student");
                        EnrollmentError::MissingStudent(member_id)
                    })?;

                classmates.push(Classmate {
                    student_id: member.id,
                    student_email: member.email,
                });
            }

            result.push(CourseClassmates {
                course_id,
                course_name: course.name,
                classmates,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{
        MockCourseRepo, MockEnrollmentRepo, MockStudentRepo, RepoError,
    };
    use crate::test_fixtures::{course, fixed_time, student};
    use coursemgmt_domain::{EnrollmentId, EnrollmentStatus, NewEnrollment};

    fn use_case(
        student_repo: MockStudentRepo,
        course_repo: MockCourseRepo,
        enrollment_repo: MockEnrollmentRepo,
    ) -> ListClassmates {
        ListClassmates::new(
            Arc::new(Student::new(Arc::new(student_repo))),
            Arc::new(Course::new(Arc::new(course_repo))),
            Arc::new(Enrollment::new(
                Arc::new(enrollment_repo),
                Arc::new(FixedClock(fixed_time())),
            )),
        )
    }

    fn row(student_id: i64, course_id: i64) -> coursemgmt_domain::Enrollment {
        NewEnrollment::new(
            StudentId::new(student_id),
            CourseId::new(course_id),
            EnrollmentStatus::Active,
            fixed_time(),
        )
        .with_id(EnrollmentId::new(student_id * 1000 + course_id))
    }

    fn campus_students() -> MockStudentRepo {
        let mut repo = MockStudentRepo::new();
        repo.expect_get().returning(|id| {
            Ok(match id.get() {
                1 => Some(student(1, "a@x.com")),
                2 => Some(student(2, "b@x.com")),
                3 => Some(student(3, "c@x.com")),
                _ => None,
            })
        });
        repo
    }

    fn campus_courses() -> MockCourseRepo {
        let mut repo = MockCourseRepo::new();
        repo.expect_get().returning(|id| {
            Ok(match id.get() {
                101 => Some(course(101, "Intro")),
                102 => Some(course(102, "Databases")),
                _ => None,
            })
        });
        repo
    }

    #[tokio::test]
    async fn when_student_not_found_returns_error() {
        let mut student_repo = MockStudentRepo::new();
        student_repo.expect_get().returning(|_| Ok(None));
        let mut enrollment_repo = MockEnrollmentRepo::new();
        enrollment_repo.expect_list_classmates().never();

        let err = use_case(student_repo, MockCourseRepo::new(), enrollment_repo)
            .execute(StudentId::new(9))
            .await
            .expect_err("unknown student");

        assert_eq!(err.to_string(), "student data not found");
    }

    #[tokio::test]
    async fn groups_sorted_and_excludes_self() {
        let mut enrollment_repo = MockEnrollmentRepo::new();
        // Unordered, with a duplicate and a self row
        enrollment_repo.expect_list_classmates().returning(|_| {
            Ok(vec![
                row(3, 102),
                row(3, 101),
                row(1, 101),
                row(2, 101),
                row(3, 101),
            ])
        });

        let courses = use_case(campus_students(), campus_courses(), enrollment_repo)
            .execute(StudentId::new(1))
            .await
            .expect("listing succeeds");

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].course_id, CourseId::new(101));
        assert_eq!(courses[0].course_name, "Intro");
        let ids: Vec<i64> = courses[0]
            .classmates
            .iter()
            .map(|c| c.student_id.get())
            .collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(courses[1].course_name, "Databases");
        assert_eq!(courses[1].classmates[0].student_email, "c@x.com");
        assert!(courses
            .iter()
            .flat_map(|c| &c.classmates)
            .all(|c| c.student_id != StudentId::new(1)));

        let wire = courses[0].to_protocol();
        assert_eq!(wire.class_mates[0].student_id, "2");
    }

    #[tokio::test]
    async fn no_classmates_yields_empty_list() {
        let mut enrollment_repo = MockEnrollmentRepo::new();
        enrollment_repo
            .expect_list_classmates()
            .returning(|_| Ok(vec![]));

        let courses = use_case(campus_students(), MockCourseRepo::new(), enrollment_repo)
            .execute(StudentId::new(1))
            .await
            .expect("listing succeeds");

        assert!(courses.is_empty());
    }

    #[tokio::test]
    async fn missing_course_stops_processing() {
        let mut enrollment_repo = MockEnrollmentRepo::new();
        enrollment_repo
            .expect_list_classmates()
            .returning(|_| Ok(vec![row(2, 777)]));

        let err = use_case(campus_students(), campus_courses(), enrollment_repo)
            .execute(StudentId::new(1))
            .await
            .expect_err("dangling course");

        assert_eq!(err.to_string(), "course data is not found for courseID: 777");
    }

    #[tokio::test]
    async fn missing_classmate_stops_processing() {
        let mut enrollment_repo = MockEnrollmentRepo::new();
        enrollment_repo
            .expect_list_classmates()
            .returning(|_| Ok(vec![row(8, 101)]));

        let err = use_case(campus_students(), campus_courses(), enrollment_repo)
            .execute(StudentId::new(1))
            .await
            .expect_err("dangling student");

        assert!(err.is_business());
        assert_eq!(err.to_string(), "student data is not found for studentID: 8");
    }

    #[tokio::test]
    async fn classmate_lookup_failure_names_the_student() {
        let mut student_repo = MockStudentRepo::new();
        student_repo.expect_get().returning(|id| {
            if id.get() == 1 {
                Ok(Some(student(1, "a@x.com")))
            } else {
                Err(RepoError::database("get_student", "locked"))
            }
        });
        let mut enrollment_repo = MockEnrollmentRepo::new();
        enrollment_repo
            .expect_list_classmates()
            .returning(|_| Ok(vec![row(2, 101)]));

        let err = use_case(student_repo, campus_courses(), enrollment_repo)
            .execute(StudentId::new(1))
            .await
            .expect_err("store failure");

        assert!(err.is_infrastructure());
        assert_eq!(err.to_string(), "failed to retrieve student data: 2");
    }

    #[tokio::test]
    async fn raw_listing_failure_is_infrastructure() {
        let mut enrollment_repo = MockEnrollmentRepo::new();
        enrollment_repo
            .expect_list_classmates()
            .returning(|_| Err(RepoError::database("list_classmates", "locked")));

        let err = use_case(campus_students(), MockCourseRepo::new(), enrollment_repo)
            .execute(StudentId::new(1))
            .await
            .expect_err("store failure");

        assert_eq!(err.to_string(), "failed to get list of classmates");
    }
}
