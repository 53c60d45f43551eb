//! Built-in function reference, grouped by the section that documents it.

/// One documented built-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtin {
    pub signature: &'static str,
    pub description: &'static str,
    pub example: Option<&'static str>,
}

/// A titled group of built-ins inside a section.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinGroup {
    pub title: Option<&'static str>,
    pub functions: &'static [Builtin],
}

/// Everything rendered inside one reference section.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceSection {
    /// Registry id of the section.
    pub id: &'static str,
    pub groups: &'static [BuiltinGroup],
    pub note: Option<&'static str>,
}

const fn f(signature: &'static str, description: &'static str, example: &'static str) -> Builtin {
    Builtin {
        signature,
        description,
        example: Some(example),
    }
}

const fn bare(signature: &'static str, description: &'static str) -> Builtin {
    Builtin {
        signature,
        description,
        example: None,
    }
}

const CORE: &[BuiltinGroup] = &[
    BuiltinGroup {
        title: Some("Input/Output Functions"),
        functions: &[
            f(
                "print(...values)",
                "Prints values to the console",
                r#"print("Hello", "World", 123)"#,
            ),
            f(
                "input(prompt?)",
                "Gets user input from terminal (synchronous)",
                r#"l name = input("Enter name: ")"#,
            ),
            f(
                "writestdout(...values)",
                "Prints to stdout without newline",
                r#"writestdout("Loading...")"#,
            ),
            f(
                "errorlog(...msg)",
                "Prints error messages to console",
                r#"errorlog("Error occurred!")"#,
            ),
        ],
    },
    BuiltinGroup {
        title: Some("Stylized Output Functions"),
        functions: &[
            f(
                "coolPrint(msg)",
                r#"Prints with "[COOL PRINT]" prefix"#,
                r#"coolPrint("Success!")"#,
            ),
            f(
                "fancyLog(msg)",
                r#"Prints with "✨ FANCY LOG:" prefix"#,
                r#"fancyLog("Info message")"#,
            ),
            f(
                "stylishWarn(msg)",
                r#"Prints with "⚠️ STYLISH WARNING:" prefix"#,
                r#"stylishWarn("Be careful!")"#,
            ),
            f(
                "errorPop(msg)",
                r#"Prints with "❌ ERROR POP:" prefix"#,
                r#"errorPop("Fatal error!")"#,
            ),
        ],
    },
    BuiltinGroup {
        title: Some("Random & Utility Functions"),
        functions: &[
            f(
                "rand(min?, max?)",
                "Returns random number (0-1 if no params, or between min-max)",
                "l random = rand(1, 10)  // Random between 1-10, can be a float",
            ),
            f(
                "randInt(min?, max?)",
                "Returns random integer between min and max",
                "l dice = randInt(1, 6)  // Random integer 1-6",
            ),
            f(
                "round(num, precision?)",
                "Rounds number to specified decimal places (default 0)",
                "l rounded = round(3.14159, 2)  // 3.14",
            ),
        ],
    },
];

const MATH: &[BuiltinGroup] = &[
    BuiltinGroup {
        title: Some("Basic Math"),
        functions: &[
            f("abs(x)", "Returns absolute value", "abs(-5) // 5"),
            f("max(...numbers)", "Returns the largest number", "max(1, 5, 3) // 5"),
            f("min(...numbers)", "Returns the smallest number", "min(1, 5, 3) // 1"),
            f("pow(base, exponent)", "Returns base raised to exponent", "pow(2, 3) // 8"),
            f("sqrt(x)", "Returns square root", "sqrt(16) // 4"),
            f("floor(x)", "Rounds down to nearest integer", "floor(3.7) // 3"),
            f("ceil(x)", "Rounds up to nearest integer", "ceil(3.2) // 4"),
            f("exp(x)", "Returns e raised to power of x", "exp(1) // 2.718..."),
            f("log(x)", "Returns natural logarithm", "log(e()) // 1"),
        ],
    },
    BuiltinGroup {
        title: Some("Trigonometric Functions (radians)"),
        functions: &[
            f("sin(x)", "Returns sine", "sin(pi() / 2) // 1"),
            f("cos(x)", "Returns cosine", "cos(0) // 1"),
            f("tan(x)", "Returns tangent", "tan(pi() / 4) // 1"),
            f("asin(x)", "Returns arcsine", "asin(1) // π/2"),
            f("acos(x)", "Returns arccosine", "acos(1) // 0"),
            f("atan(x)", "Returns arctangent", "atan(1) // π/4"),
        ],
    },
    BuiltinGroup {
        title: Some("Trigonometric Functions (degrees)"),
        functions: &[
            f("sind(degrees)", "Returns sine of degrees", "sind(90) // 1"),
            f("cosd(degrees)", "Returns cosine of degrees", "cosd(0) // 1"),
            f("tand(degrees)", "Returns tangent of degrees", "tand(45) // 1"),
            f(
                "toRadians(degrees)",
                "Converts degrees to radians",
                "toRadians(180) // π",
            ),
            f(
                "toDegrees(radians)",
                "Converts radians to degrees",
                "toDegrees(pi()) // 180",
            ),
        ],
    },
    BuiltinGroup {
        title: Some("Mathematical Constants"),
        functions: &[
            bare("pi()", "Returns π (3.14159...)"),
            bare("e()", "Returns Euler's number (2.71828...)"),
        ],
    },
    BuiltinGroup {
        title: Some("Hyperbolic Functions"),
        functions: &[
            bare("sinh(x)", "Hyperbolic sine"),
            bare("cosh(x)", "Hyperbolic cosine"),
            bare("tanh(x)", "Hyperbolic tangent"),
            bare("asinh(x)", "Inverse hyperbolic sine"),
            bare("acosh(x)", "Inverse hyperbolic cosine"),
            bare("atanh(x)", "Inverse hyperbolic tangent"),
        ],
    },
];

const STRING: &[BuiltinGroup] = &[BuiltinGroup {
    title: None,
    functions: &[
        f(
            "len(str)",
            "Returns length of string (also works with arrays)",
            r#"len("Hello") // 5"#,
        ),
        f(
            "upper(str)",
            "Converts string to uppercase",
            r#"upper("hello") // "HELLO""#,
        ),
        f(
            "lower(str)",
            "Converts string to lowercase",
            r#"lower("HELLO") // "hello""#,
        ),
        f(
            "split(str, delimiter)",
            "Splits string into array",
            r#"split("a,b,c", ",") // ["a","b","c"]"#,
        ),
        f(
            "reverse(str)",
            "Reverses a string",
            r#"reverse("hello") // "olleh""#,
        ),
        f(
            "join(arr, delimiter)",
            "Joins array elements into string",
            r#"join(["a","b"], "-") // "a-b""#,
        ),
    ],
}];

const ARRAY: &[BuiltinGroup] = &[
    BuiltinGroup {
        title: Some("Basic Array Operations"),
        functions: &[
            f(
                "push(arr, ...items)",
                "Adds items to array and returns modified array",
                "push([1,2], 3, 4) // [1,2,3,4]",
            ),
            f(
                "pop(arr)",
                "Removes last item and returns modified array",
                "pop([1,2,3]) // [1,2]",
            ),
            f(
                "sort(arr, compareFn?)",
                "Sorts array and returns it",
                "sort([3,1,2]) // [1,2,3]",
            ),
            f(
                "reverse(arr)",
                "Reverses array and returns it",
                "reverse([1,2,3]) // [3,2,1]",
            ),
            f(
                "slice(arr, start, end)",
                "Returns new sliced array",
                "slice([1,2,3,4], 1, 3) // [2,3]",
            ),
            f(
                "includes(arr, value)",
                "Checks if array contains value",
                "includes([1,2,3], 2) // true",
            ),
        ],
    },
    BuiltinGroup {
        title: Some("Advanced Array Functions"),
        functions: &[
            f(
                "filter(arr, callback)",
                "Returns new filtered array",
                "l evens = filter([1,2,3,4], f(x) { return x % 2 == 0 })\n// Result: [2, 4]",
            ),
            f(
                "map(arr, callback)",
                "Returns new mapped array",
                "l doubled = map([1,2,3], f(x) { return x * 2 })\n// Result: [2, 4, 6]",
            ),
            f(
                "newArr(arr, size, fillValue?)",
                "Creates new array from existing with specified size and fill value",
                "l zeros = newArr([], 5, 0)  // [0, 0, 0, 0, 0]",
            ),
        ],
    },
];

const HTTP: &[BuiltinGroup] = &[
    BuiltinGroup {
        title: Some("Basic HTTP Requests"),
        functions: &[
            f(
                "httpGet(url, parseType?)",
                "Makes HTTP GET request",
                "l promise = httpGet(\"https://api.example.com/data\")\n\
                 awaitPromise(promise, f(data) { print(data) }, f(err) { print(err) })",
            ),
            f(
                "httpPost(url, data)",
                "Makes HTTP POST request with JSON data",
                "l promise = httpPost(\"https://api.example.com/users\", '{\"name\":\"John\"}')\n\
                 awaitPromise(promise, f(response) { print(\"Created!\") }, f(err) { print(err) })",
            ),
            f(
                "httpPut(url, data)",
                "Makes HTTP PUT request with JSON data",
                r#"httpPut("https://api.example.com/users/1", '{"name":"Jane"}')"#,
            ),
            f(
                "httpDelete(url)",
                "Makes HTTP DELETE request",
                r#"httpDelete("https://api.example.com/users/1")"#,
            ),
        ],
    },
    BuiltinGroup {
        title: Some("Promise Handling"),
        functions: &[
            f(
                "awaitPromise(promise, onSuccess, onError)",
                "Handles async operations",
                "l promise = httpGet(\"https://api.example.com/user\")\n\
                 awaitPromise(promise, f(userData) {\n    \
                 print(\"User: \" + userData)\n\
                 }, f(error) {\n    \
                 errorlog(\"Failed to fetch user:\", error)\n\
                 })",
            ),
            f(
                "parseJson(jsonString) / stringifyJson(obj)",
                "Safely parse and stringify JSON",
                "l jsonStr = '{\"name\": \"Alice\", \"age\": 30}'\n\
                 l userData = parseJson(jsonStr)\n\
                 l backToJson = stringifyJson(userData)",
            ),
        ],
    },
];

const DATETIME: &[BuiltinGroup] = &[
    BuiltinGroup {
        title: Some("Current Date/Time"),
        functions: &[
            f("now()", "Returns current Date object", "l currentDate = now()"),
            f(
                "timestamp()",
                "Returns current timestamp in milliseconds",
                "l ts = timestamp()",
            ),
        ],
    },
    BuiltinGroup {
        title: Some("Date Formatting"),
        functions: &[
            f("dateToISO(date)", "Converts date to ISO string", "dateToISO(now())"),
            f(
                "dateToLocal(date)",
                "Converts date to local string",
                "dateToLocal(now())",
            ),
            f("dateToShort(date)", "MM/DD/YYYY format", "dateToShort(now())"),
            f("dateToLong(date)", "Long readable format", "dateToLong(now())"),
        ],
    },
    BuiltinGroup {
        title: Some("Date Calculations"),
        functions: &[
            f(
                "dateAdd(date, value, unit)",
                "Adds time to date (units: years, months, days, hours, minutes, seconds)",
                r#"dateAdd(now(), 7, "days")  // Add 7 days"#,
            ),
            f(
                "dateDiffInDays(date1, date2)",
                "Returns difference in days",
                "dateDiffInDays(now(), futureDate)",
            ),
            f(
                "dateStartOf(date, unit)",
                "Gets start of time period (year, month, day, hour)",
                r#"dateStartOf(now(), "day")  // Start of today"#,
            ),
        ],
    },
];

const FILES: &[BuiltinGroup] = &[BuiltinGroup {
    title: None,
    functions: &[
        f(
            "read(path, options?)",
            "Reads file content (default encoding: utf-8)",
            "l content = read(\"config.txt\")\nl jsonConfig = read(\"config.json\")",
        ),
        f(
            "write(file, data)",
            "Writes content to file",
            "write(\"output.txt\", \"Hello World!\")\nwrite(\"data.json\", stringifyJson(userData))",
        ),
    ],
}];

const TIMERS: &[BuiltinGroup] = &[BuiltinGroup {
    title: None,
    functions: &[
        f(
            "Timeout(fn, delay)",
            "Sets a timeout to execute function after delay (milliseconds)",
            "l timeoutId = Timeout(f() {\n    print(\"This runs after 2 seconds\")\n}, 2000)",
        ),
        f(
            "Interval(fn, interval)",
            "Sets an interval to execute function repeatedly",
            "l intervalId = Interval(f() {\n    print(\"This runs every second\")\n}, 1000)",
        ),
        f(
            "stopTimeout(timeoutId)",
            "Clears a timeout",
            "stopTimeout(timeoutId)",
        ),
        f(
            "stopInterval(intervalId)",
            "Clears an interval",
            "stopInterval(intervalId)",
        ),
    ],
}];

/// Reference content in page order.
pub const SECTIONS: &[ReferenceSection] = &[
    ReferenceSection {
        id: "core",
        groups: CORE,
        note: None,
    },
    ReferenceSection {
        id: "math",
        groups: MATH,
        note: None,
    },
    ReferenceSection {
        id: "string",
        groups: STRING,
        note: None,
    },
    ReferenceSection {
        id: "array",
        groups: ARRAY,
        note: None,
    },
    ReferenceSection {
        id: "http",
        groups: HTTP,
        note: None,
    },
    ReferenceSection {
        id: "datetime",
        groups: DATETIME,
        note: None,
    },
    ReferenceSection {
        id: "files",
        groups: FILES,
        note: Some(
            "File system functions work in Node.js environments. \
             Use these for server-side scripts, data processing, and configuration management.",
        ),
    },
    ReferenceSection {
        id: "timers",
        groups: TIMERS,
        note: None,
    },
];

/// Reference content for a section id.
pub fn section(id: &str) -> Option<&'static ReferenceSection> {
    SECTIONS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use aydocs_core::catalog;

    use super::*;

    #[test]
    fn test_reference_matches_builtins_registry() {
        let registry = catalog::builtins_sections().unwrap();
        let registry_ids: Vec<&str> = registry.iter().map(|s| s.id.as_str()).collect();
        let reference_ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(registry_ids, reference_ids);
    }

    #[test]
    fn test_every_section_documents_something() {
        for section in SECTIONS {
            assert!(
                section.groups.iter().any(|g| !g.functions.is_empty()),
                "{} is empty",
                section.id
            );
        }
    }

    #[test]
    fn test_section_lookup() {
        assert_eq!(section("math").map(|s| s.id), Some("math"));
        assert!(section("strings").is_none());
        assert!(section("files").and_then(|s| s.note).is_some());
    }
}
