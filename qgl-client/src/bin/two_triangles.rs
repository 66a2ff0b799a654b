use std::process::ExitCode;

use qgl_core::LessonKind;

fn main() -> ExitCode {
    qgl_client::launch(LessonKind::TwoTriangles)
}
