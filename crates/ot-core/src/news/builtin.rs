//! Archive content shipped with the site.

use chrono::NaiveDate;

use super::{EntryBody, NewsDate, NewsEntry, YearGroup};

fn day(year: i32, month: u32, dom: u32, html: &str) -> NewsEntry {
    let date = NaiveDate::from_ymd_opt(year, month, dom).expect("built-in archive dates are valid");
    NewsEntry {
        date: NewsDate::Day(date),
        body: EntryBody::Html(html.to_string()),
    }
}

fn group(year: i32, entries: Vec<NewsEntry>) -> YearGroup {
    YearGroup { year, entries }
}

pub(super) fn groups() -> Vec<YearGroup> {
    vec![
        group(2009, vec![
            day(2009, 2, 20, "Auf der Ergebnisseite wurde ein Link zu \
                <a href=\"http://www.eyeplorer.com\">eyeplorer.com</a> hinzugefügt"),
        ]),
        group(2008, vec![
            day(
                2008,
                12,
                22,
                "Die Wikipedia-Links (im rechten Bereich auf der Seite mit den Suchergebnissen) \
                 wurden aktualisiert. Der Stand der Links entspricht der Wikipedia vom 2008-12-06.",
            ),
            day(
                2008,
                11,
                23,
                "OpenThesaurus enthält durch die starke Community-Beteiligung insbesondere in den \
                 letzten Wochen jetzt erstmals 50.000 Wörter. Das wurde auch als Anlass genommen, \
                 um der Homepage www.openthesaurus.de ein neues Design zu geben.",
            ),
            day(2008, 9, 28, "Im bald erscheinenden OpenOffice.org 3.0 werden Wörterbücher \
                und Thesauri als Extensions installiert. Den jeweils tagesaktuellen OpenThesaurus \
                gibt es deshalb unter \"Download\" jetzt auch als Extension, also im .oxt-Format. \
                Die Installation erfolgt ganz einfach über das Menü in OpenOffice.org unter \
                <em>Extras -&gt; Extension Manager</em>. Die alten Thesaurus-Dateiformate \
                funktionieren in OpenOffice.org 3.0 übrigens nicht mehr."),
            day(
                2008,
                8,
                9,
                "Wer OpenThesaurus mit <a rel=\"nofollow\" \
                 href=\"http://www.openoffice.org/\">OpenOffice.org</a> 3.0 beta nutzen möchte, \
                 braucht dazu <a rel=\"nofollow\" \
                 href=\"http://extensions.services.openoffice.org/project/dict-de\">diese \
                 Extension</a>, die auch das Wörterbuch für die deutsche Rechtschreibprüfung \
                 enthält.",
            ),
            day(
                2008,
                4,
                8,
                "Das kürzlich veröffentlichte <a \
                 href=\"http://download.openoffice.org/\">OpenOffice.org 2.4</a> enthält leider \
                 einen recht alten Thesaurus. Über <em>Datei -&gt; Assistenten -&gt; Weitere \
                 Wörterbücher installieren...</em> kann man aber sehr einfach eine neue Version \
                 mit den aktuellen OpenThesaurus-Daten installieren.",
            ),
            day(
                2008,
                3,
                15,
                "Für Mac-User (ab Mac OS X 10.5) gibt es jetzt von Wolfgang Reszel ein <a \
                 href=\"http://www.tekl.de/deutsch/OpenThesaurus_Deutsch.html\">\
                 Wörterbuch-Plugin</a>, mit dem man OpenThesaurus im Mac-Wörterbuch durchsuchen \
                 kann. Ein ähnliches Plugin gibt es von \
                 <a href=\"http://www.pindarsign.de/webblog/?p=57\">Simon Dittlmann</a>.",
            ),
        ]),
        group(2007, vec![
            day(2007, 9, 29, "Ab sofort steht ein <a href=\"feed.xml\">RSS-Feed</a> zur Verfügung, \
                der alle Änderungen in den Thesaurus-Daten auflistet."),
            day(
                2007,
                7,
                12,
                "Ab jetzt sind auf der Ergebnis-Seite auch Links aus der Wikipedia integriert. \
                 Dabei handelt es sich nicht einfach um Synonyme, sondern um Wörter, die im \
                 Wikipedia-Artikel zum aktuellen Suchbegriff verlinkt sind. Damit eignet sich \
                 OpenThesaurus jetzt noch besser zum Auffinden von Assoziationen. Beispiele zum \
                 Ausprobieren: <a href=\"overview.php?word=Demokratie\">Demokratie</a>, <a \
                 href=\"overview.php?word=Welt\">Welt</a>, <a \
                 href=\"overview.php?word=Wald\">Wald</a>",
            ),
            day(
                2007,
                5,
                11,
                "Mehr Eintr&auml;ge aus dem deutschen <a \
                 href=\"http://de.wiktionary.org\">Wiktionary</a>: schon l&auml;nger wird bei \
                 jeder Suche automatisch auch das Wiktionary durchsucht -- diese Daten wurden \
                 aktualisiert und umfassen jetzt &uuml;ber 21.000 deutsche W&ouml;rter, \
                 zus&auml;tzlich zu den über 41.000 W&ouml;rtern aus OpenThesaurus.",
            ),
        ]),
        group(2006, vec![
            day(2006, 9, 25, "Bessere Performance: Nach einem Umzug des Servers vor drei Wochen \
                hatte die Geschwindigkeit von www.openthesaurus.de etwas nachgelassen. Durch \
                Optimierungen an der Datenbank sollte die gesamte Website \
                jetzt wieder deutlich schneller sein."),
            day(
                2006,
                7,
                4,
                "Das neue <a href=\"http://de.openoffice.org\">OpenOffice.org</a> 2.0.3 enthält \
                 jetzt den deutschen OpenThesaurus, so dass keine nachträgliche Installation des \
                 Thesaurus mehr nötig ist.",
            ),
            day(
                2006,
                6,
                11,
                "Die für OpenOffice.org exportierten Dateien enthalten jetzt auch Antonyme, z.B. \
                 findet man bei der Suche nach <span class=\"bsp\">Krieg</span> auch den Eintrag \
                 <span class=\"bsp\">Frieden (Antonym)</span>. Da viele Wörter allerdings keine \
                 echten Antonyme haben, betrifft das insgesamt nur wenige Einträge.",
            ),
            day(2006, 3, 17, "OpenThesaurus steht ab sofort nicht mehr unter der \
                <a href=\"http://www.gnu.org/copyleft/gpl.html\">GPL</a> zu Verfügung, sondern \
                unter der <a href=\"http://www.gnu.org/copyleft/lesser.html\">LGPL</a>."),
            day(
                2006,
                2,
                22,
                "Der Datenexport für OpenOffice.org 2.x wurde so verbessert, dass jetzt auch \
                 Wörter gefunden werden die in Klammern Zusatzinformationen haben, z.B. <span \
                 class=\"bsp\">Velo (schweiz.)</span>. Bisher wurde dieser Eintrag bei der Suche \
                 nach <span class=\"bsp\">Velo</span> nicht gefunden, mit der aktuellen Version \
                 geht das jetzt. Insgesamt betrifft das ca. 1000 Wörter, ein Update (in \
                 OpenOffice.org über \"Assistenten\" -&gt; \"Weitere Wörterbücher installieren\") \
                 lohnt sich also. Siehe auch <a href=\"faq.php#ooo\">den Eintrag in der FAQ</a>.",
            ),
        ]),
        group(2005, vec![
            day(
                2005,
                4,
                18,
                "Der Thesaurus für OpenOffice.org 2.0 beinhaltet ab jetzt auch Oberbegriffe. \
                 Außerdem sei noch auf die Seite <a \
                 href=\"background.php\">Hintergrundinformationen</a> hingewiesen, auf der sich \
                 zwei Papers über OpenThesaurus befinden.",
            ),
            day(
                2005,
                3,
                4,
                "Passend zur <a \
                 href=\"http://download.openoffice.org/680/index.html\">OpenOffice.org&nbsp;2.0 \
                 beta</a> gibt es jetzt hier auch den Thesaurus für OOo&nbsp;2.0 -- der alte \
                 Thesaurus funktioniert nämlich nicht mehr (und genauso läuft der neue nicht mit \
                 OpenOffice&nbsp;1.x). Hauptvorteil des neuen Thesaurus ist die Unterstützung \
                 mehrerer Bedeutungen pro Wort, z.&nbsp;B. findet <span \
                 class=\"bsp\">Auflösung</span> jetzt die verschiedenen Bedeutungen (<span \
                 class=\"bsp\">Auflösung</span> im Sinne von <span class=\"bsp\">Antwort</span>, \
                 im Sinne von <span class=\"bsp\">Granularität</span> etc) und zu diesen dann die \
                 Synonyme -- ähnlich wie hier auf der Website.",
            ),
        ]),
        group(2004, vec![
            day(
                2004,
                9,
                27,
                "Es stehen jetzt einige shortcuts (\"access keys\") zur Verfügung, so dass man \
                 Teile dieser Website über Tastaturkürzel bedienen kann: <a \
                 href=\"keys.php#korr\">Liste der Tastaturkürzel</a>. Außerdem kann man jetzt auch \
                 auf den Text neben einer Checkbox klicken, um diese zu aktivieren (bisher musste \
                 man die Checkbox selber anklicken).",
            ),
            day(2004, 6, 21, "An die aktiven Teilnehmer: beachtet bitte die zwei kleinen \
                Ergänzungen zum Thema regionale und veraltete Wörter \
                in der <a href=\"faq.php#korr\">FAQ</a>."),
            day(2004, 6, 16, "Umzug auf den neuen Server abgeschlossen."),
            day(2004, 4, 7, "Aus Geschwindigkeitsgründen kann die Datenbank-Statistik \
                auf der Homepage nur noch alle 10 Minuten aktualisiert werden. Die \
                <a href=\"top_users.php\">Benutzer-Top10</a> wird weiterhin \
                in Echtzeit aktualisiert."),
            day(2004, 4, 4, "OpenThesaurus ist jetzt unter der Domain \
                <span style=\"color:#666666;font-weight:bold\">www.openthesaurus.de</span> \
                zu erreichen."),
            day(2004, 3, 31, "Neues Feature: <a href=\"top_users.php\">Benutzer-Top10</a> \
                -- listet die Top 15 der Benutzer, die in den letzten 7 bzw. 365 Tagen \
                die meisten Beiträge geleistet haben. Aus Datenschutzgründen \
                muss man als Benutzer erst auf der Seite <a href=\"prefs.php\">Einstellungen</a> \
                seinen Namen (oder ein Pseudonym) angeben, sonst erscheint \
                der eigene Eintrag nur als \"anonym\"."),
            day(
                2004,
                1,
                12,
                "Es gibt jetzt es eine Mailingliste für Diskussionen und Announcements zu \
                 OpenThesaurus: <a \
                 href=\"http://lists.berlios.de/mailman/listinfo/openthesaurus-discuss#sub\">Hier \
                 eintragen</a>",
            ),
            NewsEntry {
                date: NewsDate::Day(
                    NaiveDate::from_ymd_opt(2004, 1, 6).expect("built-in archive dates are valid"),
                ),
                body: EntryBody::WithTaxonomyRoot {
                    before: "Es stehen ab sofort auch einzelne \
                        Begriffe in den Daten, also Wörter ohne Synonyme. Das hat seine \
                        Richtigkeit, denn es wird jetzt eine Begriffshierarchie aufgebaut. \
                        Oberster Begriff, der alle anderen Nomen umfasst, ist "
                        .to_string(),
                    after: ". Mehr dazu in der <a href=\"faq.php#hierarchie\">FAQ</a>.".to_string(),
                },
            },
        ]),
        group(2003, vec![
            day(2003, 11, 6, "<a href=\"download/openthesaurus.pdf\">An \
                English language paper about OpenThesaurus (PDF, 266 KB)</a> is now available. \
                <br />Update 2004-06-13: the paper has been slightly updated."),
            day(
                2003,
                10,
                18,
                "OpenThesaurus wird jetzt auch mit <a \
                 href=\"http://www.suse.de/de/private/products/suse_linux/i386/\">Suse Linux \
                 9.0</a> mitgeliefert und automatisch zusammen mit OpenOffice.org installiert. Wer \
                 die aktuellste OpenThesaurus-Version nutzen möchte, kann natürlich weiterhin die \
                 ZIP-Datei von dieser Website runterladen und die vorhandenen Dateien einfach \
                 überspielen. Damit man sehen kann, wieviel geändert wurde, habe ich die \
                 Datenbank-Statistik verbessert: Es wird jetzt angezeigt, wieviele Wörter in den \
                 letzten 7 Tagen hinzugefügt wurden.",
            ),
            day(2003, 9, 26, "Als eingeloggter User \
                kann man ab jetzt in einer Synonymgruppe auf die \
                einzelnen Wörter klicken, um ihren Status auf z.B. \
                \"umgangssprachlich\" zu setzen. Ab sofort sind diese \
                Informationen über die Benutzung von Wörtern auch Teil \
                des OpenOffice.org-Thesaurus."),
            day(2003, 9, 16, "Ab sofort kann man auch \
                nach flektierten Wörtern suchen. Zum Beispiel wird bei der Suche \
                nach <span class=\"bsp\">gehst</span> oder <span class=\"bsp\">ging</span> \
                jetzt automatisch eine Suche nach <span class=\"bsp\">gehen</span> \
                vorgeschlagen."),
            day(2003, 9, 12, "Das Suchen nach Wörtern sollte \
                jetzt auch funktionieren, wenn man Cookies deaktiviert hat. Meldet Euch, falls \
                das nicht klappt. (Nur zum Login sind weiter Cookies nötig.)"),
            day(2003, 9, 10, "Es ist jetzt kein Login als \
                \"guest\" mehr nötig, wenn man nur nach Begriffen suchen will. Wie \
                bisher muss man sich einloggen, um Begriffe einzufügen oder \
                zu löschen. Übrigens: unter <a href=\"prefs.php\">Einstellungen</a> kann \
                man dann auch sein Passwort ändern und eine persönliche Statistik \
                der hinzugefügten/gelöschten Einträge abrufen."),
            NewsEntry {
                date: NewsDate::Month {
                    year: 2003,
                    month: 3,
                    label: "März 2003".to_string(),
                },
                body: EntryBody::Html("OpenThesaurus geht online.".to_string()),
            },
        ]),
    ]
}
