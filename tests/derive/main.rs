use roster::{Record, RecordList};

#[derive(Debug, Clone, PartialEq, Record)]
struct Book {
    #[record(name)]
    title: String,
    #[record(age)]
    edition: u16,
    #[record(id)]
    isbn: i64,
    shelf: String,
}

#[derive(Debug, Clone, PartialEq, Record)]
struct Member {
    name: String,
    age: u8,
    id: u32,
}

fn book(title: &str, edition: u16, isbn: i64) -> Book {
    Book {
        title: title.into(),
        edition,
        isbn,
        shelf: "main".into(),
    }
}

#[test]
fn attributes_select_the_fields() {
    let b = book("Dune", 3, 9780441013593);
    assert_eq!(b.name(), "Dune");
    assert_eq!(b.age(), 3);
    assert_eq!(b.id(), 9780441013593);
    assert_eq!(b.shelf, "main");
}

#[test]
fn conventional_field_names_need_no_attributes() {
    let m = Member {
        name: "Ada".into(),
        age: 36,
        id: 7,
    };
    assert_eq!((m.name(), m.age(), m.id()), ("Ada", 36, 7));
}

#[test]
fn derived_records_work_in_a_list() {
    let mut books: RecordList<Book> = vec![
        book("Emma", 2, 11),
        book("Dune", 1, 12),
        book("Dune Messiah", 1, 13),
    ]
    .into();

    books.sort_by_age();
    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "Dune Messiah", "Emma"]);

    let hits: Vec<i64> = books.search("Dune").map(|b| b.isbn).collect();
    assert_eq!(hits, vec![12, 13]);

    let by_id: Vec<&str> = books.search("11").map(|b| b.title.as_str()).collect();
    assert_eq!(by_id, vec!["Emma"]);
}
