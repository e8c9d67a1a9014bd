//! Print the geometry the converter reads for each page

use pdf_papersize::classify::{classify, PageGeometry};
use pdf_papersize::pdf::{DocumentIo, LopdfBackend};
use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: inspect_geometry <pdf_file>");
        return;
    }

    let doc = LopdfBackend::open(Path::new(&args[1])).expect("Failed to load PDF");

    println!("Total pages: {}", doc.page_count());

    for index in 0..doc.page_count() {
        println!("\n=== Page {} ===", index + 1);

        let rotation = doc.rotation(index).expect("Failed to read rotation");
        println!("Rotate: {}", rotation);

        let (media_width, media_height) = doc.media_box(index).expect("Failed to read media box");
        println!("MediaBox: {} x {}", media_width, media_height);

        let image = doc.first_image_size(index).expect("Failed to scan resources");
        match image {
            Some(size) => println!("First image: {} x {} px", size.width, size.height),
            None => println!("First image: none"),
        }

        let geometry = PageGeometry {
            image,
            media_width,
            media_height,
        };
        println!("Would classify as: {}", classify(&geometry).label());
    }
}
