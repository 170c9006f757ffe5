use crate::notification::NotificationKind;

pub(super) fn template_for(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::NewOrderAdmin => NEW_ORDER_ADMIN_HTML,
        NotificationKind::LowStock => LOW_STOCK_HTML,
        NotificationKind::OrderConfirmation => ORDER_CONFIRMATION_HTML,
        NotificationKind::OrderStatusUpdate => ORDER_STATUS_UPDATE_HTML,
        NotificationKind::VerificationCode => VERIFICATION_CODE_HTML,
        NotificationKind::Welcome => WELCOME_HTML,
    }
}

const NEW_ORDER_ADMIN_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body { font-family: 'Segoe UI', Arial, sans-serif; background-color: #f5f5f5; margin: 0; padding: 20px; }
        .container { max-width: 650px; margin: 0 auto; background: white; border-radius: 16px; overflow: hidden; }
        .header { background: linear-gradient(135deg, #E91E63 0%, #F06292 100%); color: white; padding: 30px; text-align: center; }
        .alert { background: #FFF3E0; border-left: 4px solid #FF9800; padding: 20px; }
        .content { padding: 30px; }
        .stats { display: flex; justify-content: space-around; background: #f9f9f9; padding: 15px; border-radius: 8px; }
        .stat-value { font-size: 24px; font-weight: bold; color: #3F51B5; text-align: center; }
        .stat-label { font-size: 12px; color: #666; text-align: center; }
        .customer { background: #E3F2FD; padding: 20px; border-radius: 8px; margin: 20px 0; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0; }
        th { background: #f5f5f5; padding: 12px; text-align: left; font-size: 13px; color: #666; border-bottom: 2px solid #ddd; }
        td { padding: 12px; border-bottom: 1px solid #eee; }
        .total-row { background: #E8EAF6; font-weight: bold; }
        .shipping { background: #F3E5F5; padding: 20px; border-radius: 8px; margin: 20px 0; }
        .footer { background: #f9f9f9; padding: 20px; text-align: center; color: #999; font-size: 12px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🛒 Retail App - Admin</h1>
            <p>Notifikasi Pesanan Baru</p>
        </div>
        <div class="alert">
            <strong>🔔 Pesanan Baru Masuk!</strong>
            <p>Ada pesanan baru yang perlu dikonfirmasi.</p>
        </div>
        <div class="content">
            <div class="stats">
                <div>
                    <div class="stat-value">{{total_items}}</div>
                    <div class="stat-label">Total Item</div>
                </div>
                <div>
                    <div class="stat-value">Rp {{total_text}}</div>
                    <div class="stat-label">Total Pembayaran</div>
                </div>
            </div>
            <div class="customer">
                <h3>👤 Informasi Pelanggan</h3>
                <p><strong>Nama:</strong> {{customer_name}}</p>
                <p><strong>Email:</strong> {{customer_email}}</p>
                <p><strong>Telepon:</strong> {{customer_phone}}</p>
                <p><strong>Order ID:</strong> #{{short_id}}</p>
            </div>
            <h3>📦 Detail Pesanan</h3>
            <table>
                <thead>
                    <tr>
                        <th>#</th>
                        <th>Produk</th>
                        <th style="text-align: center;">Qty</th>
                        <th style="text-align: right;">Harga</th>
                        <th style="text-align: right;">Subtotal</th>
                    </tr>
                </thead>
                <tbody>
                    {{#each items}}
                    <tr>
                        <td>{{position}}</td>
                        <td>{{product_name}}</td>
                        <td style="text-align: center;">{{quantity}}</td>
                        <td style="text-align: right;">Rp {{price_text}}</td>
                        <td style="text-align: right;">Rp {{subtotal_text}}</td>
                    </tr>
                    {{/each}}
                    <tr class="total-row">
                        <td colspan="4">Total Pembayaran</td>
                        <td style="text-align: right;">Rp {{total_text}}</td>
                    </tr>
                </tbody>
            </table>
            <div class="shipping">
                <h4>📍 Alamat Pengiriman</h4>
                <p>{{shipping_address}}</p>
            </div>
            <p style="color: #999; font-size: 12px;">Waktu pesanan: {{ordered_at}}</p>
            <p style="color: #666; font-size: 14px;">Silakan login ke dashboard admin untuk memproses pesanan ini.</p>
        </div>
        <div class="footer">
            <p>© Retail App Admin Panel</p>
            <p>Email ini dikirim secara otomatis untuk notifikasi pesanan baru.</p>
        </div>
    </div>
</body>
</html>"##;

const LOW_STOCK_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background: linear-gradient(135deg, #dc3545 0%, #c82333 100%); padding: 30px; text-align: center; border-radius: 10px 10px 0 0;">
        <h1 style="color: white; margin: 0; font-size: 24px;">⚠️ Peringatan Stok Rendah</h1>
        <p style="color: rgba(255,255,255,0.9); margin: 10px 0 0 0;">Beberapa produk memerlukan perhatian Anda</p>
    </div>
    <div style="background-color: #f8f9fa; padding: 30px; border-radius: 0 0 10px 10px;">
        <div style="background-color: #fff3cd; border: 1px solid #ffc107; padding: 15px; border-radius: 8px; margin-bottom: 20px;">
            <p style="margin: 0; color: #856404;">
                <strong>🔔 Perhatian:</strong> {{product_count}} produk memiliki stok ≤ 3 unit dan perlu segera di-restock.
            </p>
        </div>
        <table style="width: 100%; border-collapse: collapse; background-color: white;">
            <thead>
                <tr style="background-color: #FFC20E;">
                    <th style="padding: 12px; text-align: left;">Nama Produk</th>
                    <th style="padding: 12px; text-align: left;">Kategori</th>
                    <th style="padding: 12px; text-align: center;">Stok</th>
                    <th style="padding: 12px; text-align: center;">Status</th>
                </tr>
            </thead>
            <tbody>
                {{#each products}}
                <tr>
                    <td style="padding: 12px; border-bottom: 1px solid #eee;">{{product_name}}</td>
                    <td style="padding: 12px; border-bottom: 1px solid #eee;">{{category}}</td>
                    <td style="padding: 12px; border-bottom: 1px solid #eee; text-align: center;">
                        <span style="background-color: {{badge_color}}; color: {{badge_text_color}}; padding: 4px 12px; border-radius: 12px; font-weight: bold;">{{current_stock}}</span>
                    </td>
                    <td style="padding: 12px; border-bottom: 1px solid #eee; text-align: center;">
                        <span style="color: {{status_color}}; font-weight: bold;">⚠️ {{status_label}}</span>
                    </td>
                </tr>
                {{/each}}
            </tbody>
        </table>
        <p style="color: #666; font-size: 14px; text-align: center; margin-top: 25px;">
            Segera tambahkan stok untuk menghindari kehabisan produk.
        </p>
        <hr style="border: none; border-top: 1px solid #eee; margin: 25px 0;">
        <p style="color: #999; font-size: 12px; text-align: center; margin: 0;">
            Email ini dikirim otomatis oleh sistem Retail App.<br>
            Waktu: {{checked_at}} WIB
        </p>
    </div>
</body>
</html>"##;

const ORDER_CONFIRMATION_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; padding: 0; background-color: #f4f4f4;">
    <div style="max-width: 600px; margin: 0 auto; background-color: #ffffff;">
        <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 40px 20px; text-align: center;">
            <h1 style="color: #ffffff; margin: 0; font-size: 28px;">🛍️ Retail App</h1>
            <p style="color: #e8e8e8; margin-top: 10px;">Konfirmasi Pesanan</p>
        </div>
        <div style="text-align: center; padding: 30px 0;">
            <h2 style="color: #333;">✓ Pesanan Berhasil!</h2>
        </div>
        <div style="padding: 20px 30px;">
            <p style="color: #666666; font-size: 16px;">Halo <strong>{{name}}</strong>,</p>
            <p style="color: #666666; font-size: 16px; line-height: 1.6;">
                Terima kasih telah berbelanja di Retail App! Pesanan Anda telah kami terima dan sedang diproses.
            </p>
            <div style="background-color: #f8f9fa; padding: 15px; border-radius: 8px; margin: 20px 0;">
                <p style="margin: 0; color: #666;"><strong>No. Pesanan:</strong> #{{short_id}}</p>
                <p style="margin: 10px 0 0; color: #666;"><strong>Tanggal:</strong> {{ordered_on}}</p>
            </div>
            <h3 style="color: #333; margin-top: 30px;">Detail Pesanan</h3>
            <table style="width: 100%; border-collapse: collapse; margin-top: 10px;">
                <thead>
                    <tr style="background-color: #f8f9fa;">
                        <th style="padding: 12px; text-align: left; border-bottom: 2px solid #ddd;">Produk</th>
                        <th style="padding: 12px; text-align: center; border-bottom: 2px solid #ddd;">Qty</th>
                        <th style="padding: 12px; text-align: right; border-bottom: 2px solid #ddd;">Harga</th>
                        <th style="padding: 12px; text-align: right; border-bottom: 2px solid #ddd;">Subtotal</th>
                    </tr>
                </thead>
                <tbody>
                    {{#each items}}
                    <tr>
                        <td style="padding: 12px; border-bottom: 1px solid #eee;">{{product_name}}</td>
                        <td style="padding: 12px; border-bottom: 1px solid #eee; text-align: center;">{{quantity}}</td>
                        <td style="padding: 12px; border-bottom: 1px solid #eee; text-align: right;">Rp {{price_text}}</td>
                        <td style="padding: 12px; border-bottom: 1px solid #eee; text-align: right;">Rp {{subtotal_text}}</td>
                    </tr>
                    {{/each}}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="3" style="padding: 15px; text-align: right; font-weight: bold; font-size: 18px;">Total:</td>
                        <td style="padding: 15px; text-align: right; font-weight: bold; font-size: 18px; color: #667eea;">Rp {{total_text}}</td>
                    </tr>
                </tfoot>
            </table>
            <h3 style="color: #333; margin-top: 30px;">Alamat Pengiriman</h3>
            <div style="background-color: #f8f9fa; padding: 15px; border-radius: 8px; margin-top: 10px;">
                <p style="margin: 0; color: #666; line-height: 1.6;">📍 {{shipping_address}}</p>
            </div>
            <div style="background-color: #fff3cd; padding: 15px; border-radius: 8px; margin-top: 20px; border-left: 4px solid #ffc107;">
                <p style="margin: 0; color: #856404; font-size: 14px;">
                    <strong>📦 Status:</strong> Pesanan sedang diproses. Anda akan menerima notifikasi saat pesanan dikirim.
                </p>
            </div>
        </div>
        <div style="background-color: #f8f8f8; padding: 20px 30px; text-align: center; border-top: 1px solid #eeeeee; margin-top: 30px;">
            <p style="color: #999999; font-size: 12px; margin: 0;">© Retail App. All rights reserved.</p>
            <p style="color: #999999; font-size: 12px; margin-top: 10px;">Jika ada pertanyaan, hubungi customer service kami.</p>
        </div>
    </div>
</body>
</html>"##;

const ORDER_STATUS_UPDATE_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body { font-family: 'Segoe UI', Arial, sans-serif; background-color: #f5f5f5; margin: 0; padding: 20px; }
        .container { max-width: 600px; margin: 0 auto; background: white; border-radius: 16px; overflow: hidden; }
        .header { background: linear-gradient(135deg, #3F51B5 0%, #5C6BC0 100%); color: white; padding: 30px; text-align: center; }
        .content { padding: 30px; }
        .status-box { border-left: 4px solid {{status.color}}; background: {{status.color}}15; padding: 20px; margin: 20px 0; border-radius: 0 8px 8px 0; }
        .status-label { font-size: 24px; font-weight: bold; color: {{status.color}}; margin-bottom: 8px; }
        .status-message { color: #666; font-size: 14px; }
        .order-info { background: #f9f9f9; padding: 15px; border-radius: 8px; margin: 20px 0; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0; }
        th { background: #f5f5f5; padding: 12px; text-align: left; font-size: 14px; color: #666; }
        td { padding: 12px; border-bottom: 1px solid #eee; }
        .total-row { background: #E8EAF6; font-weight: bold; }
        .shipping { background: #FFF3E0; padding: 15px; border-radius: 8px; margin: 20px 0; }
        .footer { background: #f9f9f9; padding: 20px; text-align: center; color: #999; font-size: 12px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🛍️ Retail App</h1>
            <p>Update Status Pesanan</p>
        </div>
        <div class="content">
            <h2>Halo, {{name}}! 👋</h2>
            <div class="status-box">
                <div class="status-label">{{status.icon}} {{status.label}}</div>
                <div class="status-message">{{status.message}}</div>
            </div>
            <div class="order-info">
                <p>Order ID: <strong>#{{short_id}}</strong></p>
            </div>
            {{#if items}}
            <h3 style="color: #333; margin-bottom: 10px;">Detail Pesanan</h3>
            <table>
                <thead>
                    <tr>
                        <th>Produk</th>
                        <th style="text-align: center;">Qty</th>
                        <th style="text-align: right;">Harga</th>
                    </tr>
                </thead>
                <tbody>
                    {{#each items}}
                    <tr>
                        <td>{{product_name}}</td>
                        <td style="text-align: center;">{{quantity}}</td>
                        <td style="text-align: right;">Rp {{price_text}}</td>
                    </tr>
                    {{/each}}
                    <tr class="total-row">
                        <td colspan="2">Total Pembayaran</td>
                        <td style="text-align: right;">Rp {{total_text}}</td>
                    </tr>
                </tbody>
            </table>
            {{/if}}
            {{#if shipping_address}}
            <div class="shipping">
                <h4>📍 Alamat Pengiriman</h4>
                <p>{{shipping_address}}</p>
            </div>
            {{/if}}
            <p style="color: #666; font-size: 14px;">Jika ada pertanyaan, silakan hubungi customer service kami.</p>
        </div>
        <div class="footer">
            <p>© Retail App. All rights reserved.</p>
            <p>Email ini dikirim secara otomatis, mohon tidak membalas email ini.</p>
        </div>
    </div>
</body>
</html>"##;

const VERIFICATION_CODE_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body { font-family: 'Segoe UI', Arial, sans-serif; background-color: #f5f5f5; margin: 0; padding: 20px; }
        .container { max-width: 500px; margin: 0 auto; background: white; border-radius: 16px; overflow: hidden; }
        .header { background: linear-gradient(135deg, #3F51B5 0%, #5C6BC0 100%); color: white; padding: 30px; text-align: center; }
        .content { padding: 30px; text-align: center; }
        .code-box { background: linear-gradient(135deg, #E8EAF6 0%, #C5CAE9 100%); border-radius: 12px; padding: 25px; margin: 20px 0; }
        .code { font-size: 36px; font-weight: bold; color: #3F51B5; letter-spacing: 8px; font-family: 'Courier New', monospace; }
        .info { color: #666; font-size: 14px; margin-top: 20px; }
        .warning { background: #FFF3E0; border-left: 4px solid #FF9800; padding: 12px; margin-top: 20px; text-align: left; font-size: 13px; color: #E65100; }
        .footer { background: #f9f9f9; padding: 20px; text-align: center; color: #999; font-size: 12px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🛍️ Retail App</h1>
        </div>
        <div class="content">
            <h2>Halo, {{name}}! 👋</h2>
            <p>Terima kasih telah mendaftar di Retail App. Masukkan kode verifikasi berikut untuk mengaktifkan akun Anda:</p>
            <div class="code-box">
                <div class="code">{{code}}</div>
            </div>
            <p class="info">Kode ini berlaku selama <strong>{{valid_minutes}} menit</strong></p>
            <div class="warning">
                ⚠️ Jangan bagikan kode ini kepada siapapun. Tim kami tidak akan pernah meminta kode verifikasi Anda.
            </div>
        </div>
        <div class="footer">
            <p>© Retail App. All rights reserved.</p>
            <p>Email ini dikirim secara otomatis, mohon tidak membalas email ini.</p>
        </div>
    </div>
</body>
</html>"##;

const WELCOME_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; padding: 0; background-color: #f4f4f4;">
    <div style="max-width: 600px; margin: 0 auto; background-color: #ffffff;">
        <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 40px 20px; text-align: center;">
            <h1 style="color: #ffffff; margin: 0; font-size: 28px;">🛍️ Retail App</h1>
            <p style="color: #e8e8e8; margin-top: 10px;">Fashion &amp; Style untuk Semua</p>
        </div>
        <div style="padding: 40px 30px;">
            <h2 style="color: #333333; margin-top: 0;">Halo, {{name}}! 👋</h2>
            <p style="color: #666666; font-size: 16px; line-height: 1.6;">
                Selamat datang di <strong>Retail App</strong>! Akun Anda telah berhasil dibuat.
            </p>
            <p style="color: #666666; font-size: 16px; line-height: 1.6;">Sekarang Anda dapat:</p>
            <ul style="color: #666666; font-size: 16px; line-height: 1.8;">
                <li>🛒 Berbelanja koleksi fashion terbaru</li>
                <li>👕 Melihat berbagai kategori: Kaos, Kemeja, Celana, Sepatu</li>
                <li>💳 Checkout dengan mudah dan aman</li>
                <li>📦 Melacak pesanan Anda</li>
            </ul>
            <div style="text-align: center; margin: 30px 0;">
                <a href="#" style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: #ffffff; padding: 15px 40px; text-decoration: none; border-radius: 25px; font-weight: bold; display: inline-block;">
                    Mulai Belanja Sekarang
                </a>
            </div>
        </div>
        <div style="background-color: #f8f8f8; padding: 20px 30px; text-align: center; border-top: 1px solid #eeeeee;">
            <p style="color: #999999; font-size: 12px; margin: 0;">© Retail App. All rights reserved.</p>
        </div>
    </div>
</body>
</html>"##;
