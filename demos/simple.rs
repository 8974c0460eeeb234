use java_outline::analyze;

fn main() {
    let java_source = r#"
        package com.example;

        import java.util.List;

        public class Greeter {
            private String greeting = "Hello";

            public void greet(String name, int times) {
                for (int i = 0; i < times; i++) {
                    System.out.println(greeting + name);
                }
            }
        }
    "#;

    match analyze(java_source, "Greeter.java") {
        Ok(result) => {
            for line in result.render() {
                println!("{line}");
            }
            let json_output = result.to_json().unwrap();
            println!("\nAs JSON:\n{json_output}");
        }
        Err(e) => {
            eprintln!("Failed to outline source: {:?}", miette::Report::new(e));
        }
    }
}
