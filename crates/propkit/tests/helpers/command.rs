//! Helpers para ejecutar el binario compilado.

use std::path::Path;
use std::process::{Command, ExitStatus};

/// Variables de entorno que alteran el comportamiento por defecto.
const PROPKIT_ENV: [&str; 4] = [
    "PROPKIT_RESOURCE_ROOT",
    "PROPKIT_RESOURCE",
    "PROPKIT_KEY",
    "RUST_LOG",
];

/// Invocacion del binario `propkit` con un entorno limpio.
pub struct TestCommand {
    command: Command,
}

impl TestCommand {
    /// Crea el comando sin argumentos.
    pub fn new() -> Self {
        let mut command = Command::new(env!("CARGO_BIN_EXE_propkit"));
        for var in PROPKIT_ENV {
            command.env_remove(var);
        }
        Self { command }
    }

    /// Agrega argumentos.
    pub fn args(mut self, args: &[&str]) -> Self {
        self.command.args(args);
        self
    }

    /// Resuelve recursos bajo `root`.
    pub fn root(mut self, root: &Path) -> Self {
        self.command.arg("--root").arg(root);
        self
    }

    /// Define una variable de entorno.
    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.command.env(key, value);
        self
    }

    /// Ejecuta y captura la salida.
    pub fn run(mut self) -> TestOutput {
        let output = self.command.output().expect("Failed to spawn propkit");

        TestOutput {
            status: output.status,
            stdout: String::from_utf8(output.stdout).expect("stdout is not valid UTF-8"),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Resultado de una ejecucion con helpers para assertions.
#[derive(Debug)]
pub struct TestOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl TestOutput {
    /// Verifica que el proceso termino con exito.
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.status.success(),
            "Expected success but got {:?}. Stderr: {}",
            self.status.code(),
            self.stderr
        );
        self
    }

    /// Verifica el codigo de salida.
    pub fn assert_code(&self, expected: i32) -> &Self {
        assert_eq!(
            self.status.code(),
            Some(expected),
            "Unexpected exit code. Stdout: {:?} Stderr: {}",
            self.stdout,
            self.stderr
        );
        self
    }

    /// Verifica el contenido exacto de stdout.
    pub fn assert_stdout(&self, expected: &str) -> &Self {
        assert_eq!(self.stdout, expected, "Stderr: {}", self.stderr);
        self
    }

    /// Verifica que stderr contenga el texto esperado.
    pub fn assert_stderr_contains(&self, expected: &str) -> &Self {
        assert!(
            self.stderr.contains(expected),
            "Expected stderr to contain '{}' but got '{}'",
            expected,
            self.stderr
        );
        self
    }
}

/// Crea un TestCommand para el binario por defecto.
pub fn cli() -> TestCommand {
    TestCommand::new()
}
