use loppers_skeleton::{extract, SkeletonError};
use pretty_assertions::assert_eq;

fn skeleton(code: &str, lang: &str) -> String {
    extract(code, lang).unwrap_or_else(|e| panic!("{lang} extraction failed: {e}"))
}

fn assert_kept(skeleton: &str, needles: &[&str]) {
    for needle in needles {
        assert!(
            skeleton.contains(needle),
            "expected {needle:?} in skeleton:\n{skeleton}"
        );
    }
}

fn assert_removed(skeleton: &str, needles: &[&str]) {
    for needle in needles {
        assert!(
            !skeleton.contains(needle),
            "did not expect {needle:?} in skeleton:\n{skeleton}"
        );
    }
}

#[test]
fn python_keeps_docstring_drops_statements() {
    let code = r#"
def hello(name):
    """Greet."""
    print(f"Hello {name}")
    return True
"#;
    assert_eq!(
        skeleton(code, "python"),
        "\ndef hello(name):\n    \"\"\"Greet.\"\"\""
    );
}

#[test]
fn python_multiline_signature() {
    let code = r#"
def process(
    items: list,
    verbose: bool = False
) -> dict:
    result = {}
    for item in items:
        result[item] = process_item(item)
    return result
"#;
    assert_eq!(
        skeleton(code, "python"),
        "\ndef process(\n    items: list,\n    verbose: bool = False\n) -> dict:"
    );
}

#[test]
fn python_class_methods_keep_docstrings() {
    let code = r#"
class MyClass:
    def __init__(self, value):
        """Initialize."""
        self.value = value
        self._setup()

    def __str__(self):
        """String representation."""
        return f"MyClass({self.value})"

    def _setup(self):
        """Private setup method."""
        self.ready = True
"#;
    let out = skeleton(code, "python");
    assert_kept(
        &out,
        &[
            "def __init__",
            "\"\"\"Initialize.\"\"\"",
            "def __str__",
            "\"\"\"String representation.\"\"\"",
            "def _setup",
        ],
    );
    assert_removed(&out, &["self.value = value", "self.ready = True", "return f"]);
}

#[test]
fn python_nested_functions_union() {
    let code = "def outer():\n    \"\"\"Outer.\"\"\"\n    def inner():\n        return 1\n    return inner\n";
    assert_eq!(skeleton(code, "python"), "def outer():\n    \"\"\"Outer.\"\"\"");
}

#[test]
fn javascript_multiline_arrow_keeps_header_and_close() {
    let code = r#"const add = (a, b) => {
    const result = a + b;
    return result;
};

const greet = (name) => {
    console.log(`Hello ${name}`);
    return true;
};
"#;
    assert_eq!(
        skeleton(code, "javascript"),
        "const add = (a, b) => {\n};\n\nconst greet = (name) => {\n};"
    );
}

#[test]
fn javascript_class_and_function_expression() {
    let code = r#"class Counter {
  constructor() {
    this.count = 0;
  }

  increment() {
    this.count += 1;
  }
}

const handler = function (event) {
  event.preventDefault();
};
"#;
    let out = skeleton(code, "javascript");
    assert_kept(
        &out,
        &["class Counter {", "  constructor() {", "  increment() {", "const handler = function (event) {"],
    );
    assert_removed(&out, &["this.count", "preventDefault"]);
}

#[test]
fn javascript_parenthesized_body_is_blanked_in_place() {
    let code = "const double = (x) => (x * 2);\n";
    assert_eq!(skeleton(code, "javascript"), "const double = (x) => ();");
}

#[test]
fn tsx_component_keeps_delimiters() {
    let code = r#"export const App = ({ name }: Props) => (
  <div className="app">
    <h1>{name}</h1>
  </div>
);
"#;
    assert_eq!(
        skeleton(code, "tsx"),
        "export const App = ({ name }: Props) => (\n);"
    );
}

#[test]
fn typescript_interfaces_survive() {
    let code = r#"interface Shape {
  area(): number;
}

class Circle implements Shape {
  constructor(private r: number) {
    this.validate();
  }

  area(): number {
    return Math.PI * this.r ** 2;
  }
}
"#;
    assert_eq!(
        skeleton(code, "typescript"),
        "interface Shape {\n  area(): number;\n}\n\nclass Circle implements Shape {\n  constructor(private r: number) {\n  }\n\n  area(): number {\n  }\n}"
    );
}

#[test]
fn java_constructor_and_validator() {
    let code = "
public class User {
    private String name;

    public User(String name) {
        this.name = name;
        this.validate();
    }

    private void validate() {
        if (name == null) throw new Exception(\"Invalid\");
    }
}
";
    assert_eq!(
        skeleton(code, "java"),
        "\npublic class User {\n    private String name;\n\n    public User(String name) {\n    }\n\n    private void validate() {\n    }\n}"
    );
}

#[test]
fn java_lambda_inside_method() {
    let code = r#"
public class Example {
    public void test() {
        Function<Integer, Integer> doubler = x -> x * 2;
        Runnable r = () -> System.out.println("Hello");
    }
}
"#;
    let out = skeleton(code, "java");
    assert_kept(&out, &["public void test()"]);
    assert_removed(&out, &["System.out.println", "doubler"]);
}

#[test]
fn go_functions_methods_and_literals() {
    let code = r#"package main

type Calculator struct {
    value int
}

func (c Calculator) Add(x, y int) int {
    return x + y
}

func main() {
    callback := func(x int) int {
        return x * 2
    }
    result := callback(5)
}
"#;
    assert_eq!(
        skeleton(code, "go"),
        "package main\n\ntype Calculator struct {\n    value int\n}\n\nfunc (c Calculator) Add(x, y int) int {\n}\n\nfunc main() {\n}"
    );
}

#[test]
fn rust_functions_and_closures() {
    let code = r#"
fn main() {
    let add = |a, b| a + b;
    let result = add(5, 3);

    let expensive_closure = |num| {
        let expensive_result = num * num;
        expensive_result + 1
    };
}

pub trait Arithmetic {
    fn add(&self, x: i32) -> i32;
}
"#;
    assert_eq!(
        skeleton(code, "rust"),
        "\nfn main() {\n}\n\npub trait Arithmetic {\n    fn add(&self, x: i32) -> i32;\n}"
    );
}

#[test]
fn c_function_definitions() {
    let code = "#include <stdio.h>\n\nint add(int x, int y) {\n    return x + y;\n}\n\nint decl(int n);\n";
    assert_eq!(
        skeleton(code, "c"),
        "#include <stdio.h>\n\nint add(int x, int y) {\n}\n\nint decl(int n);"
    );
}

#[test]
fn cpp_lambdas_and_methods() {
    let code = r#"
void process() {
    auto add = [](int a, int b) { return a + b; };

    std::vector<int> v = {1, 2, 3};
    std::sort(v.begin(), v.end(),
        [](int a, int b) { return a > b; });
}

class Calculator {
    int add(int x, int y) {
        return x + y;
    }
};
"#;
    let out = skeleton(code, "cpp");
    assert_kept(&out, &["void process() {", "class Calculator {", "    int add(int x, int y) {", "};"]);
    assert_removed(&out, &["return a + b", "std::sort", "return x + y"]);
}

#[test]
fn csharp_properties_and_lambdas() {
    let code = r#"
public class User {
    public string Name { get; set; }

    public int Age {
        get { return _age; }
        set { _age = value; }
    }

    public User(string name) {
        Name = name;
    }

    public void Process() {
        var result = items.Where(x => x.Value > 10);
        var anon = delegate(int x) { return x * 2; };
    }
}
"#;
    let out = skeleton(code, "csharp");
    assert_kept(
        &out,
        &[
            "public string Name { get; set; }",
            "public int Age {",
            "public User(string name) {",
            "public void Process() {",
        ],
    );
    assert_removed(&out, &["return _age", "_age = value", "Name = name", "return x * 2"]);
}

#[test]
fn ruby_methods_keep_end() {
    let code = r#"
class Calculator
  def add(a, b)
    result = a + b
    result
  end

  def self.multiply(a, b)
    a * b
  end
end
"#;
    assert_eq!(
        skeleton(code, "ruby"),
        "\nclass Calculator\n  def add(a, b)\n  end\n\n  def self.multiply(a, b)\n  end\nend"
    );
}

#[test]
fn php_methods_and_functions() {
    let code = r#"<?php
function helper($x) {
    return $x + 1;
}

class Service {
    public function process($data) {
        $callback = function($item) {
            return $item * 2;
        };
        return array_map($callback, $data);
    }
}
"#;
    let out = skeleton(code, "php");
    assert_kept(&out, &["function helper($x) {", "public function process($data) {"]);
    assert_removed(&out, &["return $x + 1", "return $item * 2", "array_map"]);
}

#[test]
fn kotlin_functions_and_accessors() {
    let code = r#"
fun greet(name: String): String {
    return "Hello, $name"
}

class User {
    private var _age: Int = 0

    var age: Int
        get() {
            return _age
        }
        set(value) {
            _age = value
        }

    fun validate() {
        if (_age < 0) throw IllegalArgumentException("Invalid age")
    }
}
"#;
    let out = skeleton(code, "kotlin");
    assert_kept(&out, &["fun greet(name: String): String", "fun validate()", "var age: Int"]);
    assert_removed(&out, &["return \"Hello, $name\"", "throw IllegalArgumentException", "_age = value"]);
}

#[test]
fn swift_functions_and_methods() {
    let code = r#"
func greet(name: String) -> String {
    return "Hello, \(name)!"
}

class Greeter {
    func sayHello() {
        print("Hello!")
    }
}
"#;
    let out = skeleton(code, "swift");
    assert_kept(&out, &["func greet(name: String) -> String", "func sayHello()"]);
    assert_removed(&out, &["print", "return"]);
}

#[test]
fn lua_functions_keep_end() {
    let code = r#"
function greet(name)
    local greeting = "Hello " .. name
    print(greeting)
    return greeting
end

function sayGoodbye()
    print("Goodbye")
end
"#;
    assert_eq!(
        skeleton(code, "lua"),
        "\nfunction greet(name)\nend\n\nfunction sayGoodbye()\nend"
    );
}

#[test]
fn scala_function_blocks() {
    let code = r#"
def greet(name: String): String = {
    val greeting = "Hello " + name
    println(greeting)
    greeting
}

class Greeter {
    def sayHello(): Unit = {
        println("Hello!")
    }
}
"#;
    let out = skeleton(code, "scala");
    assert_kept(&out, &["def greet(name: String): String =", "def sayHello(): Unit ="]);
    assert_removed(&out, &["val greeting", "println"]);
}

#[test]
fn objc_methods() {
    let code = r#"
- (NSString *)greet:(NSString *)name {
    NSString *greeting = @"Hello";
    NSLog(@"%@", greeting);
    return greeting;
}

- (void)printMessage {
    NSLog(@"Message");
}
"#;
    let out = skeleton(code, "objc");
    assert_kept(&out, &["- (NSString *)greet:(NSString *)name", "- (void)printMessage"]);
    assert_removed(&out, &["NSString *greeting", "NSLog"]);
}

#[test]
fn cobol_is_rejected_with_supported_list() {
    match extract("IDENTIFICATION DIVISION.", "cobol") {
        Err(SkeletonError::UnsupportedLanguage {
            requested,
            supported,
        }) => {
            assert_eq!(requested, "cobol");
            assert!(supported.contains(&"python"));
            assert!(supported.contains(&"objc"));
        }
        other => panic!("expected UnsupportedLanguage, got {other:?}"),
    }
}
