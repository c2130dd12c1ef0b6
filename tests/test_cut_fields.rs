pub mod util;

#[test]
fn tab_delimited_stdin() {
    util::test_command()
        .fields(&["2"])
        .stdin("a\tb\tc\td\n")
        .build()
        .assert()
        .code(0)
        .stdout("c\n");

    util::test_command()
        .fields(&["0", "2-3"])
        .stdin("a\tb\tc\td\ne\tf\tg\th\n")
        .build()
        .assert()
        .code(0)
        .stdout("a\tc\td\ne\tg\th\n");
}

#[test]
fn multi_space_delimited_stdin() {
    util::test_command()
        .fields(&["0-1"])
        .stdin("a    b    c\n")
        .build()
        .assert()
        .code(0)
        .stdout("a  b\n");

    util::test_command()
        .fields(&["1"])
        .stdin("a b  c d\n")
        .build()
        .assert()
        .code(0)
        .stdout("c d\n");
}

#[test]
fn tab_delimited_file() {
    util::test_command()
        .input("tests/files/tabbed.txt")
        .fields(&["1", "3"])
        .build()
        .assert()
        .code(0)
        .stdout(
            "name\tkind
foo.txt\tfile
bar\tdir
long name.md\tfile
",
        );
}

#[test]
fn multi_space_delimited_file() {
    util::test_command()
        .input("tests/files/spaced.txt")
        .fields(&["1-2"])
        .build()
        .assert()
        .code(0)
        .stdout(
            "name  size
foo.txt  12
bar  4096
long name.md  7
",
        );
}

#[test]
fn delimiter_detected_from_first_line() {
    // The header has no tab, so lines are split on multiple spaces throughout.
    util::test_command()
        .input("tests/files/no_tab_header.txt")
        .fields(&["0"])
        .build()
        .assert()
        .code(0)
        .stdout("header\n1\tfoo.txt\t12\n2\n");

    // The first input decides the delimiter for every input that follows.
    util::test_command()
        .input("tests/files/tabbed.txt")
        .input("tests/files/spaced.txt")
        .fields(&["0"])
        .build()
        .assert()
        .code(0)
        .stdout(
            "id
1
2
3
id  name          size  kind
1   foo.txt       12    file
2   bar           4096  dir
3   long name.md  7     file
",
        );
}

#[test]
fn stdin_between_files() {
    util::test_command()
        .input("tests/files/tabbed.txt")
        .input("-")
        .fields(&["2"])
        .stdin("x\ty\tz\n")
        .build()
        .assert()
        .code(0)
        .stdout("size\n12\n4096\n7\nz\n");
}

#[test]
fn out_of_range_fields() {
    util::test_command()
        .fields(&["5"])
        .stdin("a\tb\tc\n")
        .build()
        .assert()
        .code(0)
        .stdout("\n");

    util::test_command()
        .fields(&["1-3"])
        .stdin("a\tb\tc\nd\ne\tf\n")
        .build()
        .assert()
        .code(0)
        .stdout("b\tc\n\nf\n");
}

#[test]
fn descending_range_selects_nothing() {
    util::test_command()
        .fields(&["5-2"])
        .stdin("a\tb\tc\td\te\tf\n")
        .build()
        .assert()
        .code(0)
        .stdout("\n");
}

#[test]
fn fields_given_out_of_order() {
    // Field 1 is skipped, since the scan is already past it when field 3 is matched.
    util::test_command()
        .fields(&["3", "1"])
        .stdin("a\tb\tc\td\n")
        .build()
        .assert()
        .code(0)
        .stdout("d\n");

    util::test_command()
        .option("--sorted")
        .fields(&["3", "1"])
        .stdin("a\tb\tc\td\n")
        .build()
        .assert()
        .code(0)
        .stdout("b\td\n");

    util::test_command()
        .option("-s")
        .fields(&["2-3", "1-2"])
        .stdin("a  b  c  d\n")
        .build()
        .assert()
        .code(0)
        .stdout("b  c  d\n");
}

#[test]
fn empty_input() {
    util::test_command()
        .fields(&["0"])
        .stdin("")
        .build()
        .assert()
        .code(0)
        .stdout("");
}

#[test]
fn missing_file() {
    util::test_command()
        .input("tests/files/does_not_exist.txt")
        .fields(&["0"])
        .build()
        .assert()
        .code(1)
        .stdout("");
}
