//! Built-in sample content: the "Control Flow" Python lesson and its module
//! quiz. Used as seed data and by tests across the workspace.

use crate::model::{
    Checklist, CodeExample, Exercise, Lesson, LessonId, Narrative, QuestionId, Quiz, QuizOption,
    QuizQuestion, Section, SectionId, TokenRule,
};

fn narrative(id: &str, title: &str, body: &str) -> Section {
    Section::Narrative(Narrative {
        id: SectionId::new(id),
        title: title.to_owned(),
        body: body.to_owned(),
    })
}

fn code_example(id: &str, title: &str, code: &str, output: &str) -> Section {
    Section::CodeExample(CodeExample {
        id: SectionId::new(id),
        title: title.to_owned(),
        code: code.to_owned(),
        expected_output: output.to_owned(),
    })
}

/// The checklist that approves a FizzBuzz submission: a ranged for loop,
/// modulo checks against 3 and 5, and each output literal.
#[must_use]
pub fn fizzbuzz_checklist() -> Checklist {
    let rules = [
        TokenRule::literal("for"),
        TokenRule::literal("range"),
        TokenRule::any_of(["% 3", "%3"]),
        TokenRule::any_of(["% 5", "%5"]),
        TokenRule::literal("FizzBuzz"),
        TokenRule::literal("Fizz"),
        TokenRule::literal("Buzz"),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .expect("static checklist tokens are valid");
    Checklist::new(rules)
}

/// The 15-line canonical FizzBuzz output for numbers 1 through 15.
#[must_use]
pub fn fizzbuzz_expected_output() -> Vec<String> {
    [
        "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13",
        "14", "FizzBuzz",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

/// The "Control Flow" lesson from the Python Programming module.
///
/// # Panics
///
/// Panics only if the static content is inconsistent, which the tests in
/// this crate rule out.
#[must_use]
pub fn python_control_flow() -> Lesson {
    let sections = vec![
        narrative(
            "if-statements",
            "Conditional Statements (if/else)",
            "Conditional statements allow your program to make decisions based on certain \
             conditions. Python uses if, elif (else if), and else statements for this purpose.\n\n\
             if condition:\n    # code to execute if condition is True\nelif another_condition:\n    \
             # code to execute if another_condition is True\nelse:\n    # code to execute if all \
             conditions are False\n\nLet's look at a simple example that determines whether a \
             number is positive, negative, or zero:",
        ),
        code_example(
            "code-example-1",
            "Example: Checking Number Sign",
            "number = 42\n\nif number > 0:\n    print(\"The number is positive\")\nelif number < 0:\n    print(\"The number is negative\")\nelse:\n    print(\"The number is zero\")\n",
            "The number is positive",
        ),
        narrative(
            "comparison-operators",
            "Comparison Operators",
            "Python provides several comparison operators for conditional statements: == (equal \
             to), != (not equal to), > (greater than), < (less than), >= and <=. Conditions \
             combine with the logical operators and, or and not.",
        ),
        code_example(
            "code-example-2",
            "Example: Combining Conditions",
            "age = 25\nhas_license = True\n\nif age >= 18 and has_license:\n    print(\"You can drive\")\nelif age >= 18 and not has_license:\n    print(\"You need to get a license first\")\nelse:\n    print(\"You're too young to drive\")\n",
            "You can drive",
        ),
        narrative(
            "loops-intro",
            "Loops",
            "Loops allow you to execute a block of code multiple times. Python has two main \
             types of loops: for loops and while loops. For loops iterate over a sequence (like \
             a list, tuple, dictionary, set, or string):\n\nfor item in sequence:\n    # code to \
             execute for each item",
        ),
        code_example(
            "code-example-3",
            "Example: For Loop with a List",
            "fruits = [\"apple\", \"banana\", \"cherry\"]\n\nfor fruit in fruits:\n    print(f\"I like {fruit}s\")\n",
            "I like apples\nI like bananas\nI like cherrys",
        ),
        narrative(
            "range-function",
            "The range() Function",
            "The range() function generates a sequence of numbers, often used with for loops:\n\
             range(stop) generates numbers from 0 to stop-1, range(start, stop) from start to \
             stop-1, and range(start, stop, step) adds a step.",
        ),
        code_example(
            "code-example-4",
            "Example: For Loop with range()",
            "# Print numbers from 0 to 4\nfor i in range(5):\n    print(i)\n\nprint(\"\\nNumbers from 2 to 6:\")\n# Print numbers from 2 to 6\nfor i in range(2, 7):\n    print(i)\n\nprint(\"\\nEven numbers from 0 to 10:\")\n# Print even numbers from 0 to 10\nfor i in range(0, 11, 2):\n    print(i)\n",
            "0\n1\n2\n3\n4\n\nNumbers from 2 to 6:\n2\n3\n4\n5\n6\n\nEven numbers from 0 to 10:\n0\n2\n4\n6\n8\n10",
        ),
        narrative(
            "while-loops",
            "While Loops",
            "While loops execute a block of code as long as a condition is true:\n\nwhile \
             condition:\n    # code to execute while condition is True",
        ),
        code_example(
            "code-example-5",
            "Example: While Loop",
            "count = 0\n\nwhile count < 5:\n    print(f\"Count is {count}\")\n    count += 1  # Increment count by 1\n",
            "Count is 0\nCount is 1\nCount is 2\nCount is 3\nCount is 4",
        ),
        narrative(
            "break-continue",
            "Break and Continue Statements",
            "break exits the loop completely; continue skips the current iteration and moves to \
             the next one.",
        ),
        code_example(
            "code-example-6",
            "Example: Break and Continue",
            "# Using break\nprint(\"Break example:\")\nfor i in range(10):\n    if i == 5:\n        break\n    print(i)\n\n# Using continue\nprint(\"\\nContinue example:\")\nfor i in range(10):\n    if i % 2 == 0:  # Skip even numbers\n        continue\n    print(i)\n",
            "Break example:\n0\n1\n2\n3\n4\n\nContinue example:\n1\n3\n5\n7\n9",
        ),
        Section::Exercise(Exercise {
            id: SectionId::new("practice-exercise"),
            title: "Practice Exercise: FizzBuzz".to_owned(),
            instructions: "Write a program that prints numbers from 1 to 15. But for multiples \
                           of 3, print 'Fizz' instead of the number, and for multiples of 5, \
                           print 'Buzz'. For numbers that are multiples of both 3 and 5, print \
                           'FizzBuzz'."
                .to_owned(),
            starter_code: "# Write your FizzBuzz solution here\n# For numbers 1 to 15:\n# - Print \"Fizz\" for multiples of 3\n# - Print \"Buzz\" for multiples of 5\n# - Print \"FizzBuzz\" for multiples of both 3 and 5\n# - Print the number itself for other cases\n\n".to_owned(),
            solution: "for i in range(1, 16):\n    if i % 3 == 0 and i % 5 == 0:\n        print(\"FizzBuzz\")\n    elif i % 3 == 0:\n        print(\"Fizz\")\n    elif i % 5 == 0:\n        print(\"Buzz\")\n    else:\n        print(i)".to_owned(),
            hints: vec![
                "Use the modulo operator (%) to check if a number is divisible by another number"
                    .to_owned(),
                "Check for multiples of both 3 and 5 first, then check for multiples of 3, then \
                 multiples of 5"
                    .to_owned(),
                "Use a for loop with range(1, 16) to iterate from 1 to 15".to_owned(),
            ],
            checklist: fizzbuzz_checklist(),
            expected_output: fizzbuzz_expected_output(),
        }),
    ];

    Lesson::new(
        LessonId::new("control-flow"),
        "Control Flow",
        Some("Conditionals and loops in Python".to_owned()),
        45,
        sections,
    )
    .expect("static lesson content is valid")
}

/// The five-question module quiz for the Control Flow lesson.
///
/// # Panics
///
/// Panics only if the static content is inconsistent, which the tests in
/// this crate rule out.
#[must_use]
pub fn control_flow_quiz() -> Quiz {
    fn option(id: &str, text: &str) -> QuizOption {
        QuizOption {
            id: id.to_owned(),
            text: text.to_owned(),
        }
    }

    let questions = vec![
        QuizQuestion::new(
            QuestionId::new("q1"),
            "Which of the following is NOT a valid comparison operator in Python?",
            vec![
                option("a", "=="),
                option("b", "!="),
                option("c", "=>"),
                option("d", "<="),
            ],
            "c",
            "The correct comparison operators in Python are ==, !=, >, <, >=, and <=. There is \
             no => operator in Python.",
        ),
        QuizQuestion::new(
            QuestionId::new("q2"),
            "What will the following code output?\n\nfor i in range(5):\n    if i == 3:\n        break\n    print(i)",
            vec![
                option("a", "0 1 2"),
                option("b", "0 1 2 3"),
                option("c", "0 1 2 3 4"),
                option("d", "0 1 2 4"),
            ],
            "a",
            "The loop prints 0, 1, and 2, but when i equals 3, the break statement is executed, \
             which terminates the loop before printing 3.",
        ),
        QuizQuestion::new(
            QuestionId::new("q3"),
            "Which statement is used to skip the current iteration of a loop and continue with \
             the next?",
            vec![
                option("a", "pass"),
                option("b", "skip"),
                option("c", "continue"),
                option("d", "next"),
            ],
            "c",
            "The continue statement is used to skip the current iteration and move to the next \
             iteration of the loop.",
        ),
        QuizQuestion::new(
            QuestionId::new("q4"),
            "What is the output of the following code?\n\ncount = 0\nwhile count < 5:\n    count += 1\n    if count == 3:\n        continue\n    print(count)",
            vec![
                option("a", "1 2 3 4 5"),
                option("b", "1 2 4 5"),
                option("c", "1 2 3 4"),
                option("d", "0 1 2 4 5"),
            ],
            "b",
            "The loop prints 1, 2, 4, and 5. When count equals 3, the continue statement skips \
             the print statement for that iteration.",
        ),
        QuizQuestion::new(
            QuestionId::new("q5"),
            "Which of the following is a valid way to iterate through a list in Python?",
            vec![
                option("a", "for i in range(list):"),
                option("b", "for item in list:"),
                option("c", "foreach item in list:"),
                option("d", "while item in list:"),
            ],
            "b",
            "In Python, you can iterate through a list using 'for item in list:' syntax.",
        ),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .expect("static quiz content is valid");

    Quiz::new("Control Flow", questions).expect("static quiz content is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExerciseStatus, ProgressSettings, ProgressState};

    #[test]
    fn sample_lesson_is_well_formed() {
        let lesson = python_control_flow();
        assert_eq!(lesson.id(), &LessonId::new("control-flow"));
        assert_eq!(lesson.sections().len(), 13);
        assert_eq!(lesson.exercises().count(), 1);
        assert_eq!(
            lesson
                .sections()
                .iter()
                .filter_map(Section::as_code_example)
                .count(),
            6
        );
    }

    #[test]
    fn reference_solution_satisfies_the_checklist() {
        let lesson = python_control_flow();
        let exercise = lesson.exercises().next().unwrap();
        assert!(exercise.checklist.is_satisfied_by(&exercise.solution));
    }

    #[test]
    fn starter_code_does_not_satisfy_the_checklist() {
        let lesson = python_control_flow();
        let exercise = lesson.exercises().next().unwrap();
        assert!(!exercise.checklist.is_satisfied_by(&exercise.starter_code));
    }

    #[test]
    fn canonical_output_starts_with_expected_sequence() {
        let lesson = python_control_flow();
        let exercise = lesson.exercises().next().unwrap();
        let output = exercise.canonical_output();
        assert!(output.starts_with("1\n2\nFizz\n4\nBuzz"));
        assert_eq!(output.lines().count(), 15);
        assert!(output.ends_with("FizzBuzz"));
    }

    #[test]
    fn sample_quiz_is_well_formed() {
        let quiz = control_flow_quiz();
        assert_eq!(quiz.len(), 5);
        assert!(quiz.questions()[0].is_correct("c"));
        assert!(quiz.questions()[4].is_correct("b"));
    }

    #[test]
    fn state_seeding_smoke() {
        let lesson = python_control_flow();
        let state = ProgressState::for_lesson(&lesson, &ProgressSettings::default(), None);
        assert_eq!(
            state.exercise_status(&SectionId::new("practice-exercise")),
            ExerciseStatus::NotStarted
        );
        assert_eq!(
            state.output(&SectionId::new("code-example-1")),
            Some("The number is positive")
        );
    }
}
