//! Album page assembly.
//!
//! Text fields are rendered first, in page order, so that staged image
//! names are numbered the way a reader encounters them. The results are
//! then spliced into the `index.html` variables.

use crate::asset::AssetError;
use crate::config::{Album, Artwork, Track};
use crate::embed::player::IndexVars;
use crate::markdown::hooks::external_link;
use crate::markdown::{MarkdownRenderer, TextInput};
use crate::utils::html::{escape, escape_attr};

use super::format::{artwork_img, asset_href, datetime, timestamp};

/// Rendered `about` and `lyrics` fragments of one album.
#[derive(Debug, Default)]
pub struct RenderedText {
    pub about: Option<String>,
    pub tracks: Vec<TrackText>,
}

#[derive(Debug, Default)]
pub struct TrackText {
    pub about: Option<String>,
    pub lyrics: Option<String>,
}

/// Render every text field of `album`.
pub fn render_text(
    album: &Album,
    renderer: &mut MarkdownRenderer<'_>,
) -> Result<RenderedText, AssetError> {
    let about = render_about(album.about.as_ref(), renderer)?;

    let mut tracks = Vec::with_capacity(album.tracks.len());
    for track in &album.tracks {
        tracks.push(TrackText {
            about: render_about(track.about.as_ref(), renderer)?,
            lyrics: track
                .lyrics
                .as_ref()
                .filter(|text| !text.is_blank())
                .map(|text| renderer.render_lyrics(text)),
        });
    }

    Ok(RenderedText { about, tracks })
}

fn render_about(
    text: Option<&TextInput>,
    renderer: &mut MarkdownRenderer<'_>,
) -> Result<Option<String>, AssetError> {
    match text {
        Some(text) if !text.is_blank() => renderer.render_about(text).map(Some),
        _ => Ok(None),
    }
}

/// Fill the `index.html` variables.
pub fn index_vars(album: &Album, text: &RenderedText) -> IndexVars {
    let title = escape(&album.title);
    let artist = escape(&album.artist);

    let page_title = if album.artist.is_empty() {
        title.to_string()
    } else {
        format!("{artist}: {title}")
    };

    IndexVars {
        page_title,
        album_title: linked(&title, album.album_url.as_deref()),
        artist: linked(&artist, album.artist_url.as_deref()),
        cover: cover(album.artwork.as_ref()),
        about: text
            .about
            .as_ref()
            .map(|html| format!("<section id=\"about\">\n{html}</section>"))
            .unwrap_or_default(),
        tracks: album
            .tracks
            .iter()
            .zip(&text.tracks)
            .enumerate()
            .map(|(i, (track, text))| track_row(i + 1, track, text))
            .collect::<Vec<_>>()
            .join("\n"),
        runtime: runtime(album),
        fullsize: fullsize(album),
    }
}

/// `html` wrapped in an outbound link when `url` is set.
fn linked(html: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!("{}{html}</a>", external_link(url, "")),
        None => html.to_string(),
    }
}

fn cover(artwork: Option<&Artwork>) -> String {
    let Some(art) = artwork else {
        return String::new();
    };
    let mut html = artwork_img(art, &[("id", "coverart")]);
    if art.fullsize().is_some() {
        html.push_str(
            "\n<button type=\"button\" id=\"openfullsize\" title=\"View full size\" \
             aria-label=\"View full size\">&#x2922;</button>",
        );
    }
    html
}

/// Dialog and print copy of the fullsize album art.
fn fullsize(album: &Album) -> String {
    let Some(full) = album.artwork.as_ref().and_then(Artwork::fullsize) else {
        return String::new();
    };
    let src = escape_attr(&asset_href(full)).into_owned();
    format!(
        "<dialog id=\"fullsizeart\"><img alt=\"\" src=\"{src}\"></dialog>\n\
         <figure id=\"fullcover\"><img alt=\"\" src=\"{src}\" loading=\"lazy\"></figure>"
    )
}

fn runtime(album: &Album) -> String {
    let total = album.total_duration();
    if total <= 0.0 {
        return String::new();
    }
    format!(
        "{} tracks, <time datetime=\"{}\">{}</time>",
        album.tracks.len(),
        datetime(total),
        timestamp(total)
    )
}

/// One `<li>` of the track list.
fn track_row(number: usize, track: &Track, text: &TrackText) -> String {
    let title = format!("<span class=\"title\">{}</span>", escape(&track.title));

    let mut row = match &track.filename {
        Some(file) => format!(
            "<li class=\"file\" id=\"track-{number}\">\n<a href=\"{}\">{title}</a>",
            escape_attr(&asset_href(file))
        ),
        None => format!("<li class=\"track\" id=\"track-{number}\">\n{title}"),
    };

    if let Some(art) = &track.artwork {
        row.push_str(&artwork_img(art, &[("class", "thumb")]));
    }
    if track.explicit {
        row.push_str("\n<span class=\"explicit\" title=\"Explicit\">E</span>");
    }
    if let Some(duration) = track.duration {
        row.push_str(&format!(
            "\n<time class=\"duration\" datetime=\"{}\">{}</time>",
            datetime(duration),
            timestamp(duration)
        ));
    }

    let panels = [("lyrics", "Lyrics", &text.lyrics), ("about", "About", &text.about)];
    for (kind, label, html) in panels {
        if html.is_some() {
            row.push_str(&format!(
                "\n<button type=\"button\" data-disclosure=\"{kind}-{number}\">{label}</button>"
            ));
        }
    }
    for (kind, _, html) in panels {
        if let Some(html) = html {
            row.push_str(&format!(
                "\n<input type=\"checkbox\" class=\"disclosure\" id=\"{kind}-{number}\" hidden>\
                 \n<div class=\"panel {kind}\">\n{html}\n</div>"
            ));
        }
    }

    row.push_str("\n</li>");
    row
}
