//! Check what's actually in a converted PDF

use lopdf::{Document, Object};
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: check_converted <converted_pdf>");
        return Ok(());
    }

    println!("=== Checking {} ===\n", args[1]);

    let doc = Document::load(Path::new(&args[1]))?;
    let pages = doc.get_pages();
    println!("Total pages: {}", pages.len());

    for (page_num, page_id) in pages.iter() {
        println!("\n--- Page {} ---", page_num);

        let page_obj = doc.get_object(*page_id)?;
        if let Object::Dictionary(page_dict) = page_obj {
            match page_dict.get(b"MediaBox") {
                Ok(media) => println!("  MediaBox: {:?}", media),
                Err(_) => println!("  MediaBox: MISSING!"),
            }

            match page_dict.get(b"Rotate") {
                Ok(rotate) => println!("  Rotate: {:?}", rotate),
                Err(_) => println!("  Rotate: none"),
            }

            // Converted pages draw the original through a /Src form
            let mut has_src = false;
            if let Ok(Object::Dictionary(res_dict)) = page_dict.get(b"Resources") {
                if let Ok(Object::Dictionary(xobj_dict)) = res_dict.get(b"XObject") {
                    if let Ok(Object::Reference(src_id)) = xobj_dict.get(b"Src") {
                        if let Ok(Object::Stream(stream)) = doc.get_object(*src_id) {
                            has_src = true;
                            if let Ok(bbox) = stream.dict.get(b"BBox") {
                                println!("  Src BBox: {:?}", bbox);
                            }
                        }
                    }
                }
            }
            if has_src {
                println!("  Resources: Has Src form ✓");
            } else {
                println!("  Resources: NO Src form");
            }
        }
    }

    Ok(())
}
