//! In-memory PDF builders for tests.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

/// Builds a PDF with one page per entry, each line drawn as its own text object.
pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let resources_id = add_font_resources(&mut doc);

    let kids: Vec<Object> = pages
        .iter()
        .map(|lines| add_page(&mut doc, pages_id, resources_id, lines).into())
        .collect();

    finish(doc, pages_id, kids)
}

/// Readable pages followed by `unreadable` pages whose content selects a font
/// without naming it, which page-level text extraction rejects.
pub fn pdf_with_unreadable_pages(readable: &[&[&str]], unreadable: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let resources_id = add_font_resources(&mut doc);

    let mut kids: Vec<Object> = readable
        .iter()
        .map(|lines| add_page(&mut doc, pages_id, resources_id, lines).into())
        .collect();
    for _ in 0..unreadable {
        let operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![]),
            Operation::new("ET", vec![]),
        ];
        kids.push(add_page_with(&mut doc, pages_id, resources_id, operations).into());
    }

    finish(doc, pages_id, kids)
}

/// A structurally valid PDF whose page tree is empty.
pub fn zero_page_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    finish(doc, pages_id, vec![])
}

/// A PDF whose trailer declares an encryption dictionary.
pub fn encrypted_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
    });
    doc.trailer.set("Encrypt", encrypt_id);
    finish(doc, pages_id, vec![])
}

fn add_font_resources(doc: &mut Document) -> ObjectId {
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    })
}

fn add_page(doc: &mut Document, pages_id: ObjectId, resources_id: ObjectId, lines: &[&str]) -> ObjectId {
    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let y = 750 - (i as i64) * 20;
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 11.into()]));
        operations.push(Operation::new("Td", vec![72.into(), y.into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }

    add_page_with(doc, pages_id, resources_id, operations)
}

fn add_page_with(
    doc: &mut Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    operations: Vec<Operation>,
) -> ObjectId {
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("content encodes"),
    ));

    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    })
}

fn finish(mut doc: Document, pages_id: ObjectId, kids: Vec<Object>) -> Vec<u8> {
    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("pdf serializes");
    buf
}
