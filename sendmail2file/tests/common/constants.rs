pub static SIMPLE: &[u8] = b"From: a@x.com
To: b@y.com
Subject: Test

Hello
";

pub static HEADERS_ONLY: &[u8] = b"From: a@x.com\nTo: b@y.com\nSubject: Test\n\n";

pub static NO_SUBJECT: &[u8] = b"From: alice@example.com\r
To: alice@example.tld\r
\r
Hello world!\r
";

pub static MULTIPART: &[u8] = b"Date: Sat, 8 Jul 2023 07:14:29 +0200\r
From: Bob Robert <bob@example.tld>\r
To: Alice Malice <alice@example.tld>\r
To: Second Recipient <second@example.tld>\r
CC: =?ISO-8859-1?Q?Andr=E9?= Pirard <PIRARD@vm1.ulg.ac.be>\r
Subject: =?ISO-8859-1?B?SWYgeW91IGNhbiByZWFkIHRoaXMgeW8=?=\r
    =?ISO-8859-2?B?dSB1bmRlcnN0YW5kIHRoZSBleGFtcGxlLg==?=\r
Message-ID: <NTAxNzA2AC47634Y366BAMTY4ODc5MzQyODY0ODY5@www.grrrndzero.org>\r
MIME-Version: 1.0\r
Content-Type: multipart/alternative;\r
 boundary=\"b1_e376dc71bafc953c0b0fdeb9983a9956\"\r
Content-Transfer-Encoding: 7bit\r
\r
This is a multi-part message in MIME format.\r
\r
--b1_e376dc71bafc953c0b0fdeb9983a9956\r
Content-Type: text/plain; charset=utf-8\r
Content-Transfer-Encoding: quoted-printable\r
\r
GZ\r
OoOoO\r
\r
--b1_e376dc71bafc953c0b0fdeb9983a9956--\r
";

pub static MULTIPART_BODY: &str = "This is a multi-part message in MIME format.\r
\r
--b1_e376dc71bafc953c0b0fdeb9983a9956\r
Content-Type: text/plain; charset=utf-8\r
Content-Transfer-Encoding: quoted-printable\r
\r
GZ\r
OoOoO\r
\r
--b1_e376dc71bafc953c0b0fdeb9983a9956--\r
";

pub static TRUNCATED: &[u8] = b"From: a@x.com\nTo: b@y.com\nSubject: no blank line";

pub static MALFORMED: &[u8] = b"From: a@x.com\nBad entry\n  on multiple lines\n\nbody\n";
