//! Static assets baked into exported HTML documents.
//!
//! Both viewer pages are self-contained: styles and scripts ship inline so an
//! exported file opens straight from disk. Marker data rides along in
//! `data-marker` attributes with the embed fragment already rendered, so these
//! scripts only read and present. No media resolution happens in the browser.

pub const AFRAME_SRC: &str = "https://aframe.io/releases/1.4.0/aframe.min.js";

pub const VIEWER_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    background-color: #1a1a1a;
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    min-height: 100vh;
    display: flex;
    justify-content: center;
    align-items: center;
    padding: 20px;
}

.image-container {
    position: relative;
    display: inline-block;
    max-width: 100%;
}

.image-container img {
    display: block;
    max-width: 100%;
    height: auto;
}

.marker {
    position: absolute;
    width: 20px;
    height: 20px;
    border-radius: 50%;
    border: 2px solid white;
    transform: translate(-50%, -50%);
    cursor: pointer;
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.4);
    transition: transform 0.15s ease;
}

.marker:hover {
    transform: translate(-50%, -50%) scale(1.3);
}

.marker.info { background-color: #007bff; }
.marker.link { background-color: #28a745; }
.marker.audio { background-color: #ffc107; }
.marker.video { background-color: #dc3545; }

.popup-overlay {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background: rgba(0, 0, 0, 0.6);
    display: none;
    justify-content: center;
    align-items: center;
    z-index: 1000;
}

.popup-overlay.visible { display: flex; }

.popup {
    background: #ffffff;
    border-radius: 8px;
    padding: 24px;
    max-width: 520px;
    width: 90%;
    max-height: 80vh;
    overflow-y: auto;
    position: relative;
}

.popup-close {
    position: absolute;
    top: 8px;
    right: 12px;
    border: none;
    background: none;
    font-size: 22px;
    cursor: pointer;
    color: #666666;
}

#popupTitle {
    margin-bottom: 8px;
    color: #222222;
}

#popupDescription {
    margin-bottom: 12px;
    color: #444444;
    white-space: pre-wrap;
}

#popupLink {
    display: inline-block;
    margin-bottom: 12px;
    color: #28a745;
    word-break: break-all;
}

#popupMedia iframe,
#popupMedia audio,
#popupMedia video {
    width: 100%;
    border: none;
}

#popupMedia iframe { height: 280px; }
"#;

pub const VIEWER_SCRIPT: &str = r#"
function showMarkerInfo(element) {
    const marker = JSON.parse(element.getAttribute('data-marker'));
    const title = document.getElementById('popupTitle');
    const description = document.getElementById('popupDescription');
    const link = document.getElementById('popupLink');
    const media = document.getElementById('popupMedia');

    title.textContent = marker.title || 'Marker';
    description.textContent = marker.description || '';
    description.style.display = marker.description ? 'block' : 'none';

    if (marker.type === 'link' && marker.url) {
        link.href = marker.url;
        link.textContent = marker.url;
        link.style.display = 'inline-block';
    } else {
        link.style.display = 'none';
    }

    media.innerHTML = marker.embedHtml || '';

    document.getElementById('popupOverlay').classList.add('visible');
}

function closePopup() {
    document.getElementById('popupOverlay').classList.remove('visible');
    // Dropping the embed stops any playing audio or video.
    document.getElementById('popupMedia').innerHTML = '';
}

document.getElementById('popupOverlay').addEventListener('click', function(event) {
    if (event.target === this) {
        closePopup();
    }
});

document.addEventListener('keydown', function(event) {
    if (event.key === 'Escape') {
        closePopup();
    }
});
"#;

pub const VR_CSS: &str = r#"
body { margin: 0; }

.vr-popup {
    position: fixed;
    top: 16px;
    left: 50%;
    transform: translateX(-50%);
    background: rgba(20, 20, 20, 0.92);
    color: #fafafa;
    border-radius: 8px;
    padding: 16px 20px;
    max-width: 420px;
    width: 90%;
    z-index: 1000;
    display: none;
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
}

.vr-popup.visible { display: block; }

.vr-popup h2 {
    margin: 0 26px 6px 0;
    font-size: 18px;
}

.vr-popup p {
    margin: 0 0 10px 0;
    font-size: 14px;
    white-space: pre-wrap;
}

.vr-popup a {
    color: #4fc3f7;
    word-break: break-all;
}

.vr-popup-close {
    position: absolute;
    top: 6px;
    right: 10px;
    border: none;
    background: none;
    color: #a1a1aa;
    font-size: 18px;
    cursor: pointer;
}

.vr-popup-media iframe,
.vr-popup-media audio,
.vr-popup-media video {
    width: 100%;
    border: none;
}

.vr-popup-media iframe { height: 200px; }
"#;

pub const VR_VIEWER_SCRIPT: &str = r#"
function openHotspot(entity) {
    const marker = JSON.parse(entity.getAttribute('data-marker'));
    const title = document.getElementById('vrPopupTitle');
    const description = document.getElementById('vrPopupDescription');
    const link = document.getElementById('vrPopupLink');
    const media = document.getElementById('vrPopupMedia');

    title.textContent = marker.title || 'Marker';
    description.textContent = marker.description || '';
    description.style.display = marker.description ? 'block' : 'none';

    if (marker.type === 'link' && marker.url) {
        link.href = marker.url;
        link.textContent = marker.url;
        link.style.display = 'inline-block';
    } else {
        link.style.display = 'none';
    }

    media.innerHTML = marker.embedHtml || '';

    document.getElementById('vrPopup').classList.add('visible');
}

function closeHotspotPopup() {
    document.getElementById('vrPopup').classList.remove('visible');
    document.getElementById('vrPopupMedia').innerHTML = '';
}

document.querySelectorAll('.hotspot').forEach(function(entity) {
    entity.addEventListener('click', function() {
        openHotspot(entity);
    });
});

document.addEventListener('keydown', function(event) {
    if (event.key === 'Escape') {
        closeHotspotPopup();
    }
});
"#;
