pub fn test_command() -> TestCommandBuilder {
    TestCommandBuilder {
        options: Vec::new(),
        fields: Vec::new(),
        stdin: Option::None,
    }
}

pub struct TestCommandBuilder {
    options: Vec<String>,
    fields: Vec<String>,
    stdin: Option<String>,
}

impl TestCommandBuilder {
    pub fn option(mut self, option: &str) -> TestCommandBuilder {
        self.options.push(option.to_string());
        self
    }

    pub fn input(self, file: &str) -> TestCommandBuilder {
        self.option("-i").option(file)
    }

    pub fn fields(mut self, fields: &[&str]) -> TestCommandBuilder {
        self.fields.extend(fields.iter().map(|s| s.to_string()));
        self
    }

    pub fn stdin(mut self, stdin: &str) -> TestCommandBuilder {
        self.stdin = Option::Some(stdin.to_string());
        self
    }

    pub fn build(self) -> assert_cmd::Command {
        let mut args = Vec::new();
        args.extend(self.options);
        args.extend(self.fields);

        let mut command = assert_cmd::Command::cargo_bin("tabcut").unwrap();

        command.args(args);
        if let Some(stdin) = self.stdin {
            command.write_stdin(stdin);
        }
        command
    }
}
