// Pattern 3: Object Relations as Ownership
// Dependency, association, aggregation, and composition map onto Rust as
// parameters, fields, borrows, and owned values. Inheritance becomes an
// embedded struct plus capability traits.

// ============================================================================
// Example: Dependency and Association
// ============================================================================

#[derive(Default)]
struct Student {
    memory: Vec<String>,
}

impl Student {
    fn remember(&mut self, fact: String) {
        self.memory.push(fact);
    }
}

struct Course {
    name: String,
}

impl Course {
    fn knowledge(&self) -> String {
        format!("the essentials of {}", self.name)
    }
}

// Association: the professor holds their student.
// Dependency: a course only passes through `teach`.
struct Professor {
    student: Student,
}

impl Professor {
    fn teach(&mut self, course: &Course) {
        self.student.remember(course.knowledge());
    }
}

// ============================================================================
// Example: Aggregation vs Composition
// ============================================================================

// Aggregation: a department borrows its professors. Dropping the department
// leaves the professors alive.
struct Department<'a> {
    name: String,
    professors: Vec<&'a Professor>,
}

// Composition: the university owns its departments. Dropping the university
// drops them too.
struct University<'a> {
    departments: Vec<Department<'a>>,
}

impl<'a> University<'a> {
    fn new() -> Self {
        let departments = ["Science", "Computer Science", "Art"]
            .into_iter()
            .map(|name| Department {
                name: name.to_string(),
                professors: Vec::new(),
            })
            .collect();
        University { departments }
    }

    fn hire(&mut self, department: &str, professor: &'a Professor) {
        if let Some(dept) = self
            .departments
            .iter_mut()
            .find(|dept| dept.name == department)
        {
            dept.professors.push(professor);
        }
    }
}

// ============================================================================
// Example: Inheritance as Embedding plus Traits
// ============================================================================

struct Animal {
    name: String,
    position: f64,
}

impl Animal {
    fn travel(&mut self, speed: f64, duration: f64) {
        self.position += speed * duration;
    }
}

trait FourLegged {
    fn run(&mut self, destination: &str) -> String;
}

trait OxygenBreather {
    fn breathe(&self) -> String;
}

// No cat "is-an" animal hierarchy: Cat embeds the shared Animal data and
// opts into the capabilities it has. The lung count lives here, not on the
// breathing trait.
struct Cat {
    animal: Animal,
    lungs: u32,
}

impl FourLegged for Cat {
    fn run(&mut self, destination: &str) -> String {
        self.animal.travel(30.0, 1.0);
        format!("{} sprints toward {}", self.animal.name, destination)
    }
}

impl OxygenBreather for Cat {
    fn breathe(&self) -> String {
        format!("{} fills {} lungs and exhales", self.animal.name, self.lungs)
    }
}

fn main() {
    println!("=== Object Relations Demo ===\n");

    println!("--- Dependency and Association ---");
    let mut professor = Professor {
        student: Student::default(),
    };
    let course = Course {
        name: "Linear Algebra".to_string(),
    };
    professor.teach(&course);
    println!(
        "Student now remembers: {}",
        professor.student.memory.join(", ")
    );

    println!("\n--- Aggregation vs Composition ---");
    let mut university = University::new();
    university.hire("Science", &professor);
    for dept in &university.departments {
        println!("{}: {} professor(s)", dept.name, dept.professors.len());
    }
    drop(university);
    // The professor outlives the university that aggregated them.
    println!(
        "After the university closed, the professor still remembers teaching {} fact(s)",
        professor.student.memory.len()
    );

    println!("\n--- Embedding plus Traits ---");
    let mut cat = Cat {
        animal: Animal {
            name: "Mikan".to_string(),
            position: 0.0,
        },
        lungs: 2,
    };
    println!("{}", cat.run("the couch"));
    println!("{}", cat.breathe());
    println!("Position after the sprint: {}", cat.animal.position);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teaching_passes_knowledge_to_the_student() {
        let mut professor = Professor {
            student: Student::default(),
        };
        let course = Course {
            name: "Topology".to_string(),
        };
        professor.teach(&course);
        assert_eq!(
            professor.student.memory,
            vec!["the essentials of Topology".to_string()]
        );
    }

    #[test]
    fn university_composes_three_departments() {
        let university = University::new();
        let names: Vec<&str> = university
            .departments
            .iter()
            .map(|dept| dept.name.as_str())
            .collect();
        assert_eq!(names, ["Science", "Computer Science", "Art"]);
    }

    #[test]
    fn professors_survive_their_department() {
        let professor = Professor {
            student: Student::default(),
        };
        {
            let mut university = University::new();
            university.hire("Art", &professor);
            assert_eq!(university.departments[2].professors.len(), 1);
        }
        // Still usable after the university is gone.
        assert!(professor.student.memory.is_empty());
    }

    #[test]
    fn hiring_into_an_unknown_department_is_a_no_op() {
        let professor = Professor {
            student: Student::default(),
        };
        let mut university = University::new();
        university.hire("Alchemy", &professor);
        assert!(university.departments.iter().all(|d| d.professors.is_empty()));
    }

    #[test]
    fn running_moves_the_embedded_animal() {
        let mut cat = Cat {
            animal: Animal {
                name: "Mikan".to_string(),
                position: 0.0,
            },
            lungs: 2,
        };
        cat.run("the garden");
        assert_eq!(cat.animal.position, 30.0);
        cat.run("the garden");
        assert_eq!(cat.animal.position, 60.0);
    }
}
