use super::*;

#[test]
fn bare_id_is_used_directly() {
    let v = VideoEmbed::from_url("jggrSjc1if0");
    assert_eq!(v.id, "jggrSjc1if0");
    assert_eq!(v.embed_url, "https://www.youtube.com/embed/jggrSjc1if0?rel=0");
}

#[test]
fn share_url_is_reduced_to_its_id() {
    let v = VideoEmbed::from_url("https://youtu.be/YshnFne48pw?si=abc");
    assert_eq!(v.id, "YshnFne48pw");
    assert_eq!(v.raw, "https://youtu.be/YshnFne48pw?si=abc");
}

#[test]
fn empty_id_degrades_to_raw_string() {
    let v = VideoEmbed::from_url("https://example.com/");
    assert_eq!(v.id, "https://example.com/");

    let v = VideoEmbed::from_url("");
    assert_eq!(v.id, "");
    assert_eq!(v.embed_url, "https://www.youtube.com/embed/?rel=0");
}
